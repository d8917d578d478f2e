use stridevec::{StrideVec, StrideVecError};

#[test]
fn test_error_descriptions() {
    assert_eq!(
        StrideVecError::BadElementSize.to_string(),
        "Invalid element size"
    );
    assert_eq!(
        StrideVecError::BadPointer {
            expected: 4,
            actual: 3
        }
        .to_string(),
        "Bad pointer: item payload is 3 bytes, expected 4"
    );
    assert_eq!(
        StrideVecError::OutOfRange {
            index: 5,
            length: 1
        }
        .to_string(),
        "Index out of range: 5 is beyond length 1"
    );
    assert_eq!(
        StrideVecError::InvalidArgument {
            reason: "fill count must be positive"
        }
        .to_string(),
        "Invalid argument: fill count must be positive"
    );
    assert_eq!(
        StrideVecError::AllocationFailure { requested: 64 }.to_string(),
        "Allocation failure: could not obtain 64 bytes"
    );
}

#[test]
fn test_out_of_range_carries_context() {
    let mut vec = StrideVec::new(4).unwrap();
    vec.push_back(&1i32.to_le_bytes()).unwrap();

    match vec.try_get(5).unwrap_err() {
        StrideVecError::OutOfRange { index, length } => {
            assert_eq!(index, 5);
            assert_eq!(length, 1);
        }
        other => panic!("Expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_bad_pointer_carries_context() {
    let mut vec = StrideVec::new(8).unwrap();

    match vec.push_back(&[0u8; 3]).unwrap_err() {
        StrideVecError::BadPointer { expected, actual } => {
            assert_eq!(expected, 8);
            assert_eq!(actual, 3);
        }
        other => panic!("Expected BadPointer, got {other:?}"),
    }
}

#[test]
fn test_zero_element_size_rejected() {
    assert_eq!(
        StrideVec::new(0).unwrap_err(),
        StrideVecError::BadElementSize
    );
}

#[test]
fn test_errors_are_comparable_and_clonable() {
    let err = StrideVecError::OutOfRange {
        index: 2,
        length: 1,
    };
    let copy = err.clone();

    assert_eq!(err, copy);
    assert_ne!(err, StrideVecError::BadElementSize);
}

#[test]
fn test_failed_operations_leave_state_intact() {
    let mut vec = StrideVec::new(4).unwrap();
    vec.push_back(&1i32.to_le_bytes()).unwrap();
    let capacity = vec.capacity();

    assert!(vec.insert(5, &2i32.to_le_bytes()).is_err());
    assert!(vec.erase(3).is_err());
    assert!(vec.set(9, &2i32.to_le_bytes()).is_err());
    assert!(vec.assign_n(0, &2i32.to_le_bytes()).is_err());

    assert_eq!(vec.len(), 1);
    assert_eq!(vec.capacity(), capacity);
    assert_eq!(vec.get(0), Some(&1i32.to_le_bytes()[..]));
}

use ndarr::{Array, DType};

#[test]
fn test_slice_3x3_single_column() {
    let mut arr = Array::new([3, 3], DType::I32).unwrap();
    arr.fill(10);
    let sub = arr.slice(&[vec![0, 1, 2], vec![0]]).unwrap();
    assert_eq!(sub.shape(), &[3, 1]);
    assert_eq!(sub.to_vec::<i32>().unwrap(), vec![10, 10, 10]);
}

#[test]
fn test_slice_values_and_order() {
    // 0 1 2
    // 3 4 5
    // 6 7 8
    let arr = Array::from_vec([3, 3], &(0..9).collect::<Vec<i32>>()).unwrap();
    let sub = arr.slice(&[vec![1, 2], vec![0, 2]]).unwrap();
    assert_eq!(sub.shape(), &[2, 2]);
    assert_eq!(sub.to_vec::<i32>().unwrap(), vec![3, 5, 6, 8]);
}

#[test]
fn test_slice_rank3() {
    let arr = Array::from_vec([2, 2, 2], &(0..8).collect::<Vec<i32>>()).unwrap();
    let sub = arr.slice(&[vec![1], vec![0, 1], vec![1]]).unwrap();
    assert_eq!(sub.shape(), &[1, 2, 1]);
    assert_eq!(sub.to_vec::<i32>().unwrap(), vec![5, 7]);
}

#[test]
fn test_slice_does_not_alias_source() {
    let arr = Array::from_vec([2, 2], &[1i32, 2, 3, 4]).unwrap();
    let mut sub = arr.slice(&[vec![0, 1], vec![0, 1]]).unwrap();
    sub.fill(0);
    assert_eq!(arr.to_vec::<i32>().unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_slice_then_filter_compose() {
    let arr = Array::from_vec([3, 3], &[1i32, 2, 3, 40, 5, 6, 7, 8, 90]).unwrap();
    let sub = arr.slice(&[vec![0, 1, 2], vec![0, 2]]).unwrap();
    assert_eq!(sub.to_vec::<i32>().unwrap(), vec![1, 3, 40, 6, 7, 90]);
    let kept = sub
        .filter(|v| v.to_f32() > 10.0, None, ndarr::FilterMode::Any)
        .unwrap();
    assert_eq!(kept.shape(), &[2, 2]);
    assert_eq!(kept.to_vec::<i32>().unwrap(), vec![40, 6, 7, 90]);
}

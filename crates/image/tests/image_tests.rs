use base::Tensor;
use image::Image;

#[test]
fn test_dimensions_follow_hwc() {
    let image = Image::U8(Tensor::new(vec![3, 5, 3], vec![0u8; 45]).unwrap());
    assert_eq!(image.height(), 3);
    assert_eq!(image.width(), 5);
    assert_eq!(image.channels(), 3);
}

#[test]
fn test_dimensions_of_low_rank_tensor_are_zero() {
    let image = Image::F32(Tensor::new(vec![4], vec![0.0; 4]).unwrap());
    assert_eq!(image.height(), 4);
    assert_eq!(image.width(), 0);
    assert_eq!(image.channels(), 0);
}

use crate::denoise::padding::PaddedImage;
use crate::error::DenoiseError;

/// パディング画像から正方形の窓を取り出す
///
/// `(center_x, center_y)` はパディング後の座標。窓は
/// `[center_x - size/2, center_x + size/2] × [center_y - size/2, center_y + size/2]`
/// の範囲を行優先で平坦化したもので、長さは `size²`。
///
/// # エラー
///
/// * `DenoiseError::WindowOutOfBounds` - 窓がパディング画像の外にはみ出す場合
pub fn extract(
    padded: &PaddedImage,
    center_x: u32,
    center_y: u32,
    size: u32,
) -> Result<Vec<f32>, DenoiseError> {
    check_bounds(padded, center_x, center_y, size)?;
    let mut window = Vec::with_capacity(size as usize * size as usize);
    extract_into(padded, center_x, center_y, size, &mut window)?;
    Ok(window)
}

/// [`extract`] と同じだが、呼び出し側のバッファを再利用する
///
/// `window` は上書きされる。
pub fn extract_into(
    padded: &PaddedImage,
    center_x: u32,
    center_y: u32,
    size: u32,
    window: &mut Vec<f32>,
) -> Result<(), DenoiseError> {
    check_bounds(padded, center_x, center_y, size)?;
    let half = size / 2;

    window.clear();
    for y in center_y - half..=center_y + half {
        window.extend_from_slice(padded.row_span(center_x - half, y, size));
    }

    Ok(())
}

fn check_bounds(
    padded: &PaddedImage,
    center_x: u32,
    center_y: u32,
    size: u32,
) -> Result<(), DenoiseError> {
    let (width, height) = padded.dimensions();
    let half = size / 2;

    let fits = |center: u32, extent: u32| {
        center >= half && u64::from(center) + u64::from(half) < u64::from(extent)
    };

    if size == 0 || !fits(center_x, width) || !fits(center_y, height) {
        return Err(DenoiseError::WindowOutOfBounds {
            x: center_x,
            y: center_y,
            size,
            width,
            height,
        });
    }

    Ok(())
}

use crate::Image;
use image::{imageops, ImageBuffer, Luma};

/// 四辺にゼロの境界を追加した画像
///
/// 元画像の各画素が完全な近傍を持てるように、幅 `pad` の境界で囲まれている。
/// 元画像の座標 `(x, y)` はパディング画像の `(x + pad, y + pad)` に対応する。
#[derive(Debug, Clone)]
pub struct PaddedImage {
    image: Image<Luma<f32>>,
    pad: u32,
    source_dimensions: (u32, u32),
}

impl PaddedImage {
    /// 境界幅
    pub const fn pad(&self) -> u32 {
        self.pad
    }

    /// パディング前の画像サイズ (幅, 高さ)
    pub const fn source_dimensions(&self) -> (u32, u32) {
        self.source_dimensions
    }

    /// パディング後の画像サイズ (幅, 高さ)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// パディング後の画像
    pub const fn as_image(&self) -> &Image<Luma<f32>> {
        &self.image
    }

    /// パディング後の座標 `(x, y)` の輝度値
    #[inline]
    pub(crate) fn value(&self, x: u32, y: u32) -> f32 {
        self.image.get_pixel(x, y)[0]
    }

    /// 行 `y` の `x_start` から `len` 画素分の輝度値
    #[inline]
    pub(crate) fn row_span(&self, x_start: u32, y: u32, len: u32) -> &[f32] {
        let width = self.image.width() as usize;
        let start = y as usize * width + x_start as usize;
        &self.image.as_raw()[start..start + len as usize]
    }
}

/// ゼロパディング操作を提供するトレイト
pub trait ZeroPadding {
    /// 四辺に幅 `pad` のゼロ境界を追加する
    ///
    /// # 引数
    ///
    /// * `pad` - 境界幅（画素単位）
    ///
    /// # 戻り値
    ///
    /// パディング済み画像
    fn zero_pad(&self, pad: u32) -> PaddedImage;
}

impl ZeroPadding for Image<Luma<f32>> {
    fn zero_pad(&self, pad: u32) -> PaddedImage {
        let (width, height) = self.dimensions();
        let mut canvas = ImageBuffer::from_pixel(width + 2 * pad, height + 2 * pad, Luma([0.0]));
        imageops::replace(&mut canvas, self, i64::from(pad), i64::from(pad));

        PaddedImage {
            image: canvas,
            pad,
            source_dimensions: (width, height),
        }
    }
}

use wasm_bindgen::prelude::*;

/// Display size for the native-resolution sand texture
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    width: u32,
    height: u32,
    factor: f64,
}

#[wasm_bindgen]
impl Resolution {
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.width }
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.height }
    #[wasm_bindgen(getter)]
    pub fn factor(&self) -> f64 { self.factor }
}

/// Fit a `native_width` x `native_height` image into a container.
///
/// - container not larger than native in some axis: native size, factor 1
/// - container with exactly the native aspect ratio: fill it (factor may be fractional)
/// - otherwise: the largest whole scale factor that still fits
#[wasm_bindgen(js_name = fitResolution)]
pub fn fit_resolution(container_width: u32, container_height: u32, native_width: u32, native_height: u32) -> Resolution {
    if container_width <= native_width || container_height <= native_height {
        return Resolution {
            width: native_width,
            height: native_height,
            factor: 1.0,
        };
    }

    let same_aspect =
        container_width as u64 * native_height as u64 == container_height as u64 * native_width as u64;
    if same_aspect {
        return Resolution {
            width: container_width,
            height: container_height,
            factor: container_width as f64 / native_width as f64,
        };
    }

    let factor = (container_width / native_width).min(container_height / native_height);
    Resolution {
        width: native_width * factor,
        height: native_height * factor,
        factor: factor as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_container_keeps_native_size() {
        let r = fit_resolution(200, 800, 256, 144);
        assert_eq!((r.width(), r.height(), r.factor()), (256, 144, 1.0));
    }

    #[test]
    fn matching_aspect_fills_container() {
        let r = fit_resolution(640, 360, 256, 144);
        assert_eq!((r.width(), r.height()), (640, 360));
        assert_eq!(r.factor(), 2.5);
    }

    #[test]
    fn other_aspect_uses_whole_factor() {
        let r = fit_resolution(1000, 500, 256, 144);
        assert_eq!((r.width(), r.height(), r.factor()), (768, 432, 3.0));
    }
}

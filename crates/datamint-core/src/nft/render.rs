//! Image renderers for NFT artwork.
//!
//! Renderers produce SVG markup with no parameters beyond their own
//! configuration. The same configuration always yields byte-identical output.

use std::f64::consts::PI;
use std::fmt::Write;

/// Produces the SVG markup embedded into NFT metadata.
pub trait ImageRenderer {
    fn render(&self) -> String;
}

/// Fixed SVG markup, e.g. read from a file by the host.
#[derive(Debug, Clone)]
pub struct StaticSvg(pub String);

impl ImageRenderer for StaticSvg {
    fn render(&self) -> String {
        self.0.clone()
    }
}

/// Layered sine waves on a transparent canvas.
#[derive(Debug, Clone)]
pub struct WaveRenderer {
    pub width: u32,
    pub height: u32,
    pub layers: u32,
    pub amplitude: f64,
    pub wavelength: f64,
    /// Horizontal distance between sampled points.
    pub step: u32,
    pub fill: String,
}

impl Default for WaveRenderer {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 250,
            layers: 4,
            amplitude: 18.0,
            wavelength: 220.0,
            step: 20,
            fill: "#ff4092".to_string(),
        }
    }
}

impl WaveRenderer {
    fn layer_path(&self, layer: u32) -> String {
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let layers = f64::from(self.layers.max(1));
        let base = h * (0.3 + 0.5 * f64::from(layer) / layers);
        let phase = f64::from(layer) * 0.9;
        let wavelength = if self.wavelength > 0.0 { self.wavelength } else { w };
        let step = self.step.max(1) as usize;

        let mut d = String::new();
        for (i, x) in (0..=self.width).step_by(step).enumerate() {
            let x = f64::from(x);
            let y = base + self.amplitude * (2.0 * PI * x / wavelength + phase).sin();
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x:.0} {y:.2} ");
        }
        let _ = write!(d, "L{w:.0} {h:.0} L0 {h:.0} Z");
        d
    }
}

impl ImageRenderer for WaveRenderer {
    fn render(&self) -> String {
        let mut svg = format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        );
        for layer in 0..self.layers {
            let opacity = (f64::from(layer) + 1.0) / (f64::from(self.layers) + 1.0);
            let _ = write!(
                svg,
                "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{opacity:.2}\"/>",
                self.layer_path(layer),
                self.fill
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waves_are_deterministic() {
        let r = WaveRenderer::default();
        assert_eq!(r.render(), r.render());
    }

    #[test]
    fn one_path_per_layer() {
        let r = WaveRenderer {
            layers: 3,
            ..WaveRenderer::default()
        };
        let svg = r.render();
        assert!(svg.starts_with("<svg width=\"1000\""));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path ").count(), 3);
        assert!(!svg.contains("xmlns"));
    }

    #[test]
    fn static_svg_returns_input() {
        let r = StaticSvg("<svg></svg>".to_string());
        assert_eq!(r.render(), "<svg></svg>");
    }
}

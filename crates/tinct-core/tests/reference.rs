//! Behavioral checks against the host's reference data and the transform's
//! documented properties.
//!
//! Run with: `cargo test -p tinct-core`

use tinct_core::convert::bytes::byte_to_unit;
use tinct_core::tolerance::EQUAL_TOL;
use tinct_core::{Hls, Rgba, colorize, derive_deltas, hls_to_rgb, rgb_to_hls};

/// Deterministic xorshift so the sweeps are reproducible without extra crates.
struct Sampler(u64);

impl Sampler {
    fn next_byte(&mut self) -> u8 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 24) as u8
    }

    fn next_color(&mut self) -> Rgba {
        Rgba::new(self.next_byte(), self.next_byte(), self.next_byte(), self.next_byte())
    }

    fn next_chromatic(&mut self) -> Rgba {
        loop {
            let c = self.next_color();
            if !c.is_monochrome() {
                return c;
            }
        }
    }
}

fn assert_rgb_within(actual: Rgba, expected: Rgba, tolerance: u8, context: &str) {
    for (a, e, name) in [
        (actual.r, expected.r, "r"),
        (actual.g, expected.g, "g"),
        (actual.b, expected.b, "b"),
    ] {
        assert!(
            a.abs_diff(e) <= tolerance,
            "{context}: channel {name} {a} vs {e} ({actual} vs {expected})"
        );
    }
}

#[test]
fn test_reference_colorize() {
    let color = Rgba::new(115, 137, 98, 128);
    let delta = Hls::new(92.58741048890613, 0.13725490868091583, -0.11229892646129502);
    assert_eq!(colorize(color, delta, true), Rgba::new(147, 156, 158, 128));
}

#[test]
fn test_reference_deltas() {
    let from = Rgba::new(105, 137, 98, 255);
    let to = Rgba::new(147, 154, 158, 255);
    let delta = derive_deltas(from, to, true);
    let expected = Hls::new(92.58741048890613, 0.13725490868091583, -0.11229892646129502);
    assert!(delta.approx_eq(&expected), "{delta:?} vs {expected:?}");
}

#[test]
fn test_reference_monochrome_target() {
    let from = Rgba::new(105, 137, 98, 255);
    let to = Rgba::gray(128, 255);
    let delta = derive_deltas(from, to, true);
    assert_eq!(delta.h, 0.0);
    assert_eq!(delta.s, -1.0);
    assert_eq!(delta.l, rgb_to_hls(to).l - rgb_to_hls(from).l);
}

#[test]
fn test_achromatic_roundtrip_every_byte() {
    for v in 0..=255_u8 {
        let hls = rgb_to_hls(Rgba::gray(v, 200));
        assert_eq!(hls.h, -1.0, "gray {v}");
        assert_eq!(hls.s, 0.0, "gray {v}");
        assert!((hls.l - f64::from(v) / 255.0).abs() < EQUAL_TOL, "gray {v}");

        let back = hls_to_rgb(Hls::gray(byte_to_unit(v)));
        assert!(back.is_monochrome());
        assert!(back.r.abs_diff(v) <= 1, "gray {v} came back as {back}");
    }
}

#[test]
fn test_chromatic_roundtrip_within_one_byte() {
    let mut sampler = Sampler(0x9e37_79b9_7f4a_7c15);
    for _ in 0..20_000 {
        let color = sampler.next_chromatic();
        let back = hls_to_rgb(rgb_to_hls(color));
        assert_rgb_within(back, color, 1, "roundtrip");
    }
}

#[test]
fn test_alpha_passes_through() {
    let mut sampler = Sampler(42);
    let deltas = [
        Hls::default(),
        Hls::new(720.5, -2.0, 3.0),
        Hls::new(-45.0, 0.25, -1.0),
        Hls::new(180.0, 0.0, 0.5),
    ];
    for _ in 0..2_000 {
        let color = sampler.next_color();
        for delta in deltas {
            for shift in [true, false] {
                assert_eq!(colorize(color, delta, shift).a, color.a);
            }
        }
    }
}

#[test]
fn test_lightness_floor_never_reaches_black() {
    let mut sampler = Sampler(7);
    for _ in 0..2_000 {
        let color = sampler.next_color();
        let result = colorize(color, Hls::new(0.0, -10.0, 0.0), true);
        // l = 0.01 gives m2 ≤ 0.02, so every channel truncates to at most 5.
        assert!(result.r <= 5 && result.g <= 5 && result.b <= 5, "{color} -> {result}");
        assert!(result.r.max(result.g).max(result.b) >= 2, "{color} -> {result}");
    }
}

#[test]
fn test_hue_wraps_for_any_delta() {
    let color = Rgba::new(200, 60, 30, 255);
    let base = colorize(color, Hls::new(45.0, 0.0, 0.0), true);
    for turns in -4..=4 {
        let delta = Hls::new(45.0 + 360.0 * f64::from(turns), 0.0, 0.0);
        assert_eq!(colorize(color, delta, true), base, "turns {turns}");
    }
}

#[test]
fn test_inverse_consistency() {
    let mut sampler = Sampler(0xdead_beef);
    for _ in 0..5_000 {
        let from = sampler.next_chromatic().with_alpha(255);
        let to = sampler.next_chromatic().with_alpha(255);
        let delta = derive_deltas(from, to, true);
        assert_rgb_within(colorize(from, delta, true), to, 1, "inverse");
    }
}

#[test]
fn test_inverse_to_monochrome_target() {
    let from = Rgba::new(105, 137, 98, 255);
    let to = Rgba::gray(128, 255);
    let result = colorize(from, derive_deltas(from, to, true), true);
    assert!(result.is_monochrome());
    assert_rgb_within(result, to, 1, "monochrome target");
}

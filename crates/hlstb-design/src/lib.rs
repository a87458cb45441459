//! Top function of the HLS design.
//!
//! `hls_main` is the synthesis top: a pure multiply-accumulate over three
//! integers. Integer ops wrap, matching the fixed-width datapath the tools
//! generate for it.

pub fn hls_main(a: i32, b: i32, c: i32) -> i32 {
    a.wrapping_add(b.wrapping_mul(c))
}

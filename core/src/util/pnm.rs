//! Writing images in the binary PPM (NetPBM P6) format.
//!
//! PPM is a venerable and extremely simple image format: a short textual
//! header followed by raw RGB bytes. Handy for dumping frames to disk
//! without an image library.

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::util::buf::Buf2;

/// Writes `buf` to `out` as a binary PPM image.
///
/// Each element of `buf` is interpreted as a color in `0x00_RR_GG_BB`
/// format, rows top to bottom.
pub fn write_ppm(out: &mut impl Write, buf: &Buf2<u32>) -> Result<()> {
    writeln!(out, "P6\n{} {}\n255", buf.width(), buf.height())?;
    for row in buf.rows() {
        for &px in row {
            let [_, r, g, b] = px.to_be_bytes();
            out.write_all(&[r, g, b])?;
        }
    }
    Ok(())
}

/// Saves `buf` as a binary PPM image file at `path`.
///
/// See [`write_ppm`] for the pixel format.
pub fn save_ppm(path: impl AsRef<Path>, buf: &Buf2<u32>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, buf)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn header_and_payload() {
        let buf =
            Buf2::new_with((2, 1), |x, _| [0x00_FF_00_00u32, 0x00_00_12_34][x as usize]);

        let mut out = Vec::new();
        write_ppm(&mut out, &buf).unwrap();

        assert_eq!(
            out,
            b"P6\n2 1\n255\n\xFF\x00\x00\x00\x12\x34"
        );
    }

    #[test]
    fn payload_size() {
        let buf: Buf2<u32> = Buf2::new((10, 7));
        let mut out = Vec::new();
        write_ppm(&mut out, &buf).unwrap();
        assert_eq!(out.len(), b"P6\n10 7\n255\n".len() + 10 * 7 * 3);
    }
}

use bitunpack::{Error, bit_unpack_deflate, bit_unpack_inflate};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // A 1bpp glyph expanded to one byte per pixel, ink drawn as palette entry 3.
    let glyph: [u8; 4] = [0b0011_1100, 0b0100_0010, 0b0100_0010, 0b0011_1100];
    let mut pixels = [0u8; 32];
    let written = bit_unpack_inflate(&glyph, &mut pixels, 1, 8, 2, false)?;
    println!("Inflated {} bytes into {} bytes: {:?}", glyph.len(), written, &pixels[..written]);

    let mut packed = [0u8; 4];
    let packed_len = bit_unpack_deflate(&pixels[..written], &mut packed, 8, 1, 2, true)?;
    println!("Deflated back to {} bytes: {:02x?}", packed_len, &packed[..packed_len]);

    // Deflate refuses elements that no inflate with this offset could produce.
    let mut dest = [0u8; 4];
    match bit_unpack_deflate(&5u32.to_le_bytes(), &mut dest, 32, 8, 10, false) {
        Ok(n) => println!("Unexpected success: {} bytes", n),
        Err(e) => println!("Rejected as expected: {}", e),
    }

    Ok(())
}

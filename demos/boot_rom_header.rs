use bitunpack::api::unpack_with_header;
use bitunpack::{Error, TransformOptions, UnpackHeader, Width};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 2bpp tiles widened to 4bpp, shifted into palette bank 4 except for
    // transparent pixels.
    let options = TransformOptions::new(Width::W2, Width::W4).with_offset(4);
    let tiles = [0b1110_0100u8, 0b0001_1011, 0b1111_1111, 0b0000_0000];
    let header = UnpackHeader::new(tiles.len() as u16, options).to_bytes()?;
    println!("Argument block: {:02x?}", header);

    let mut dest = [0u8; 8];
    let written = unpack_with_header(&header, &tiles, &mut dest)?;
    println!("Unpacked {} bytes: {:02x?}", written, &dest[..written]);
    Ok(())
}

use crate::deflate::Deflater;
use crate::error::{ConfigError, Error};
use crate::inflate::Inflater;
use crate::options::{TransformOptions, UnpackHeader};
use crate::width::Width;

fn options(
    source_width: u8,
    dest_width: u8,
    offset: u32,
    offset_zero: bool,
) -> Result<TransformOptions, ConfigError> {
    Ok(
        TransformOptions::new(Width::try_from(source_width)?, Width::try_from(dest_width)?)
            .with_offset(offset)
            .with_offset_zero(offset_zero),
    )
}

/// Boot ROM style unpack: narrow `source_width` elements of `source` are
/// widened to `dest_width` and written to `dest`.
///
/// Returns the bytes written. Only configuration errors are possible.
pub fn bit_unpack_inflate(
    source: &[u8],
    dest: &mut [u8],
    source_width: u8,
    dest_width: u8,
    offset: u32,
    offset_zero: bool,
) -> Result<usize, Error> {
    let inflater = Inflater::new(options(source_width, dest_width, offset, offset_zero)?)
        .inspect_err(|error| tracing::debug!(%error, "rejected inflate configuration"))?;
    let (written, status) = inflater.inflate_with_status(source, dest);
    tracing::debug!(
        source_len = source.len(),
        dest_len = dest.len(),
        source_width,
        dest_width,
        written,
        ?status,
        "inflate finished"
    );
    Ok(written)
}

/// Inverse of [`bit_unpack_inflate`].
///
/// On a validation error, the bytes reported by the error's `written` were
/// already stored into `dest`.
pub fn bit_unpack_deflate(
    source: &[u8],
    dest: &mut [u8],
    source_width: u8,
    dest_width: u8,
    offset: u32,
    offset_zero: bool,
) -> Result<usize, Error> {
    let deflater = Deflater::new(options(source_width, dest_width, offset, offset_zero)?)
        .inspect_err(|error| tracing::debug!(%error, "rejected deflate configuration"))?;
    match deflater.deflate_with_status(source, dest) {
        Ok((written, status)) => {
            tracing::debug!(
                source_len = source.len(),
                dest_len = dest.len(),
                source_width,
                dest_width,
                written,
                ?status,
                "deflate finished"
            );
            Ok(written)
        }
        Err(error) => {
            tracing::debug!(%error, written = error.written(), "deflate failed");
            Err(error.into())
        }
    }
}

/// Inflates into a freshly allocated buffer sized by [`Inflater::output_len`].
pub fn inflate_to_vec(inflater: &Inflater, source: &[u8]) -> Vec<u8> {
    let mut output = vec![0u8; inflater.output_len(source.len())];
    let written = inflater.inflate(source, &mut output);
    output.truncate(written);
    output
}

/// Deflates into a freshly allocated buffer sized by [`Deflater::output_len`].
pub fn deflate_to_vec(deflater: &Deflater, source: &[u8]) -> Result<Vec<u8>, Error> {
    let mut output = vec![0u8; deflater.output_len(source.len())];
    let written = deflater.deflate(source, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Runs inflate as configured by an 8-byte argument block. The block's
/// source length selects the prefix of `source` that is read.
pub fn unpack_with_header(header: &[u8], source: &[u8], dest: &mut [u8]) -> Result<usize, Error> {
    let header = UnpackHeader::from_bytes(header)?;
    let declared = header.source_len as usize;
    let Some(source) = source.get(..declared) else {
        return Err(ConfigError::SourceTooShort {
            declared,
            available: source.len(),
        }
        .into());
    };
    let inflater = Inflater::new(header.options)?;
    let written = inflater.inflate(source, dest);
    tracing::debug!(declared, written, "header-driven inflate finished");
    Ok(written)
}

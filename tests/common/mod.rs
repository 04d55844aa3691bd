use assert_cmd::Command;

/// Build a little-endian TIFF whose Exif IFD carries `DateTimeOriginal`
/// with the given value. Lets the e2e tests produce real parseable photos
/// without binary fixture assets.
pub fn tiff_with_datetime_original(value: &str) -> Vec<u8> {
    let ascii: Vec<u8> = value.bytes().chain(std::iter::once(0)).collect();

    let mut buf = Vec::new();
    // TIFF header, IFD0 immediately after
    buf.extend_from_slice(b"II");
    buf.extend_from_slice(&42u16.to_le_bytes());
    buf.extend_from_slice(&8u32.to_le_bytes());
    // IFD0: a single entry pointing at the Exif sub-IFD at offset 26
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x8769u16.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes()); // LONG
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&26u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    // Exif IFD: DateTimeOriginal as ASCII stored at offset 44
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&0x9003u16.to_le_bytes());
    buf.extend_from_slice(&2u16.to_le_bytes()); // ASCII
    buf.extend_from_slice(&(ascii.len() as u32).to_le_bytes());
    buf.extend_from_slice(&44u32.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&ascii);
    buf
}

pub fn photorg() -> Command {
    Command::cargo_bin("photorg").unwrap()
}

//! Deterministic tests for the EEPROM image codec: golden checksum
//! vectors, layout boundaries, and the identifier/serial operations.

use ftdi_id::{EepromImage, Error};

/// Lay out a USB string descriptor at `pos` and point the two-byte
/// header at `header_addr` to it. Returns the next free byte.
fn put_string(buf: &mut [u8], header_addr: usize, pos: usize, s: &str) -> usize {
    buf[header_addr] = pos as u8;
    buf[header_addr + 1] = (s.len() * 2 + 2) as u8;
    buf[pos] = (s.len() * 2 + 2) as u8;
    buf[pos + 1] = 0x03;
    let mut at = pos + 2;
    for ch in s.bytes() {
        buf[at] = ch;
        buf[at + 1] = 0;
        at += 2;
    }
    at
}

/// Build a 256-byte image shaped like a real FT232H EEPROM: string
/// table at 0xA0, PnP block after the serial, zeroed padding, checksum.
fn sample_image() -> EepromImage {
    let mut buf = [0u8; 256];
    // vendor 0x0403, product 0x6014
    buf[0x02] = 0x03;
    buf[0x03] = 0x04;
    buf[0x04] = 0x14;
    buf[0x05] = 0x60;
    buf[0x08] = 0x80;
    buf[0x09] = 50;
    buf[0x0A] = 0x08; // use serial

    let pos = put_string(&mut buf, 0x0E, 0xA0, "FTDI");
    let pos = put_string(&mut buf, 0x10, pos, "FT232H");
    let pos = put_string(&mut buf, 0x12, pos, "FT123456");

    // PnP/legacy block; serial rewrites preserve it as the tailer
    buf[pos] = 0x02;
    buf[pos + 1] = 0x03;
    buf[pos + 2] = 0x01;

    let mut image = EepromImage::from_bytes(&buf).unwrap();
    image.finalize();
    image
}

#[test]
fn golden_checksum_all_zero() {
    // 127 words of zero leave the seed 0xAAAA rotated left 127 times,
    // which is a rotate right by one: 0x5555.
    let mut image = EepromImage::from_bytes(&[0u8; 256]).unwrap();
    image.finalize();
    assert_eq!(image.as_bytes()[254], 0x55);
    assert_eq!(image.as_bytes()[255], 0x55);
    assert!(image.verify().is_ok());
}

#[test]
fn golden_checksum_all_ff() {
    // 0xAAAA is a fixed point of (x ^ 0xFFFF).rotate_left(1).
    let mut image = EepromImage::from_bytes(&[0xFFu8; 256]).unwrap();
    assert!(matches!(
        image.verify(),
        Err(Error::ChecksumMismatch {
            stored: 0xFFFF,
            computed: 0xAAAA
        })
    ));
    image.finalize();
    assert_eq!(image.as_bytes()[254], 0xAA);
    assert_eq!(image.as_bytes()[255], 0xAA);
    assert!(image.verify().is_ok());
}

#[test]
fn golden_checksum_single_word() {
    // word 0x1234: (0xAAAA ^ 0x1234).rotate_left(1) = 0x713D, then 62
    // empty rotations: 0x713D.rotate_right(2) = 0x5C4F.
    let mut data = [0u8; 128];
    data[0] = 0x34;
    data[1] = 0x12;
    let mut image = EepromImage::from_bytes(&data).unwrap();
    image.finalize();
    assert_eq!(image.as_bytes()[126], 0x4F);
    assert_eq!(image.as_bytes()[127], 0x5C);
}

#[test]
fn finalize_is_idempotent() {
    let mut image = sample_image();
    let first = image.as_bytes().to_vec();
    image.finalize();
    assert_eq!(image.as_bytes(), first.as_slice());
}

#[test]
fn decode_is_read_only() {
    let image = sample_image();
    let before = image.as_bytes().to_vec();

    let (manufacturer, product, serial) = image.strings();
    assert_eq!(manufacturer.as_deref(), Some("FTDI"));
    assert_eq!(product.as_deref(), Some("FT232H"));
    assert_eq!(serial.as_deref(), Some("FT123456"));

    // A second pass sees the same header fields
    assert_eq!(image.strings().2.as_deref(), Some("FT123456"));
    assert_eq!(image.as_bytes(), before.as_slice());
}

#[test]
fn tailer_reads_pnp_block() {
    let image = sample_image();
    assert_eq!(image.tailer().unwrap(), [0x02, 0x03, 0x01, 0x00]);
}

#[test]
fn set_serial_preserves_tailer_and_zeroes_padding() {
    let mut image = sample_image();
    let tailer = image.tailer().unwrap();

    image.set_serial("NEWSERIAL").unwrap();

    assert_eq!(image.serial().as_deref(), Some("NEWSERIAL"));
    assert_eq!(image.tailer().unwrap(), tailer);

    // The tailer lands right after the encoded string...
    let serial_pos = image.as_bytes()[0x12] as usize;
    let tailer_pos = serial_pos + 2 + 2 * "NEWSERIAL".len();
    assert_eq!(&image.as_bytes()[tailer_pos..tailer_pos + 4], tailer.as_slice());

    // ...and everything beyond is zeroed, the identifier slot included.
    assert!(image.as_bytes()[tailer_pos + 4..].iter().all(|&b| b == 0));
    assert_eq!(image.id().unwrap(), 0);

    image.finalize();
    assert!(image.verify().is_ok());
}

#[test]
fn set_serial_rejects_overlong_and_non_ascii() {
    let mut image = sample_image();
    let before = image.as_bytes().to_vec();

    let long = "X".repeat(40);
    assert!(matches!(
        image.set_serial(&long),
        Err(Error::SerialTooLong { .. })
    ));
    assert!(matches!(
        image.set_serial("caf\u{e9}"),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(image.as_bytes(), before.as_slice());
}

#[test]
fn id_round_trip_with_small_unused_area() {
    // Header set up so the unused area is exactly 10 bytes:
    // serial at 0xE0, 16 descriptor bytes, 4 PnP bytes, checksum.
    let mut buf = [0u8; 256];
    put_string(&mut buf, 0x12, 0xE0, "SN00007");
    let mut image = EepromImage::from_bytes(&buf).unwrap();
    assert_eq!(image.unused_len(), 10);

    image.set_id(0x11223344).unwrap();
    assert_eq!(image.id().unwrap(), 0x11223344);

    image.finalize();
    assert!(image.verify().is_ok());
}

#[test]
fn id_rejected_when_unused_area_too_small() {
    // serial at 0xE7 leaves a 3-byte unused area
    let mut buf = [0u8; 256];
    buf[0x12] = 0xE7;
    buf[0x13] = 16;
    let mut image = EepromImage::from_bytes(&buf).unwrap();
    assert_eq!(image.unused_len(), 3);

    let before = image.as_bytes().to_vec();
    assert!(matches!(
        image.id(),
        Err(Error::RegionTooSmall { unused: 3 })
    ));
    assert!(matches!(
        image.set_id(1),
        Err(Error::RegionTooSmall { unused: 3 })
    ));
    assert_eq!(image.as_bytes(), before.as_slice());
}

#[test]
fn tailer_rejected_when_string_table_overruns() {
    let mut buf = [0u8; 256];
    buf[0x12] = 0xF0;
    buf[0x13] = 200;
    let image = EepromImage::from_bytes(&buf).unwrap();
    assert!(image.unused_len() < 0);
    assert!(matches!(image.tailer(), Err(Error::RegionTooSmall { .. })));
}

#[test]
fn malformed_lengths_rejected() {
    assert!(matches!(
        EepromImage::from_bytes(&[0u8; 100]),
        Err(Error::MalformedImage { len: 100 })
    ));
    assert!(matches!(
        EepromImage::from_bytes(&[0u8; 16]),
        Err(Error::MalformedImage { len: 16 })
    ));
    assert!(matches!(
        EepromImage::from_bytes(&[0u8; 2048]),
        Err(Error::MalformedImage { len: 2048 })
    ));
    assert!(matches!(
        EepromImage::from_bytes(&[]),
        Err(Error::MalformedImage { len: 0 })
    ));
}

#[test]
fn file_round_trip() {
    let image = sample_image();
    let path = std::env::temp_dir().join(format!("ftdi-id-test-{}.bin", std::process::id()));

    image.save(&path).unwrap();
    let loaded = EepromImage::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.as_bytes(), image.as_bytes());
    assert!(loaded.verify().is_ok());
}

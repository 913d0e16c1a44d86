// tests/reader_tests.rs
use audio_endian::*;

/// Build a minimal RIFF/WAVE file holding 16-bit stereo PCM
fn build_wav(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut buf = Vec::new();

    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&(36 + data_len).to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
    buf.extend_from_slice(&2u16.to_le_bytes()); // channels
    buf.extend_from_slice(&48_000u32.to_le_bytes());
    buf.extend_from_slice(&192_000u32.to_le_bytes());
    buf.extend_from_slice(&4u16.to_le_bytes());
    buf.extend_from_slice(&16u16.to_le_bytes());

    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_len.to_le_bytes());
    buf.extend_from_slice(&encode_values(samples, ByteOrder::Little));
    buf
}

fn tag_at(buf: &[u8], offset: usize) -> u32 {
    u32::from_ne_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}

#[test]
fn test_walk_wav_chunks() {
    const RIFF: u32 = make_marker(b'R', b'I', b'F', b'F');
    const WAVE: u32 = make_marker(b'W', b'A', b'V', b'E');
    const FMT: u32 = make_marker(b'f', b'm', b't', b' ');
    const DATA: u32 = make_marker(b'd', b'a', b't', b'a');

    let samples = [0i16, 1, -1, i16::MAX, i16::MIN, 0x1234];
    let wav = build_wav(&samples);

    assert_eq!(tag_at(&wav, 0), RIFF);
    assert_eq!(read_field_le32(&wav[4..]) as usize, wav.len() - 8);
    assert_eq!(tag_at(&wav, 8), WAVE);

    let mut offset = 12;
    let mut channels = 0;
    let mut decoded = Vec::new();
    while offset + 8 <= wav.len() {
        let tag = tag_at(&wav, offset);
        let size = read_field_u32(&wav[offset + 4..], ByteOrder::Little) as usize;
        let body = &wav[offset + 8..offset + 8 + size];
        match tag {
            FMT => {
                assert_eq!(read_field_le16(body), 1);
                channels = read_field_le16(&body[2..]);
                assert_eq!(read_field_le32(&body[4..]), 48_000);
            }
            DATA => {
                decoded = decode_values::<i16>(body, size / 2, ByteOrder::Little).unwrap();
            }
            other => panic!("unexpected chunk {:?}", marker_to_tag(other)),
        }
        offset += 8 + size;
    }

    assert_eq!(channels, 2);
    assert_eq!(decoded, samples.to_vec());
}

#[test]
fn test_sliding_window_scan() {
    // A stream where the sync pattern 0xFF 0xF1 appears at an odd offset
    let stream = [0x00u8, 0x12, 0xFF, 0xF1, 0x50, 0x80, 0x00];

    let hits: Vec<usize> = (0..stream.len() - 1)
        .filter(|&i| read_be16(&stream[i..]) == 0xFFF1)
        .collect();
    assert_eq!(hits, vec![2]);

    // The little-endian window reads one byte later
    let hits: Vec<usize> = (0..stream.len() - 2)
        .filter(|&i| read_le16(&stream[i..]) == 0xF1FF)
        .collect();
    assert_eq!(hits, vec![1]);
}

#[test]
fn test_window_readers_on_every_offset() {
    let stream: Vec<u8> = (1..=16).collect();
    for start in 0..stream.len() - 3 {
        let w = &stream[start..];
        assert_eq!(read_be32(w), u32::from_be_bytes([w[0], w[1], w[2], 0]));
        assert_eq!(read_le32(w), u32::from_le_bytes([0, w[0], w[1], w[2]]));
        assert_eq!(read_be16(w), u16::from_be_bytes([w[0], w[1]]));
        assert_eq!(read_le16(w), u16::from_le_bytes([w[1], w[2]]));
    }
}

#[test]
fn test_checked_readers_at_stream_end() {
    let stream = [0xAAu8, 0xBB, 0xCC];
    assert_eq!(try_read_le16(&stream), Ok(0xCCBB));
    assert_eq!(
        try_read_be32(&stream[1..]),
        Err(EndianError::BufferTooShort { needed: 3, available: 2 })
    );
}

#[test]
fn test_checked_field_access_from_crate_root() {
    let mut chunk = [0u8; 6];
    try_write_field_u16(&mut chunk, ByteOrder::Big, 0x0102).unwrap();
    try_write_field_u32(&mut chunk[2..], ByteOrder::Little, 0x0A0B_0C0D).unwrap();
    assert_eq!(chunk, [0x01, 0x02, 0x0D, 0x0C, 0x0B, 0x0A]);

    assert_eq!(try_read_field_u16(&chunk, ByteOrder::Big), Ok(0x0102));
    assert_eq!(try_read_field_u32(&chunk[2..], ByteOrder::Little), Ok(0x0A0B_0C0D));
    assert_eq!(
        try_read_field_u64(&chunk, ByteOrder::Little),
        Err(EndianError::BufferTooShort { needed: 8, available: 6 })
    );
    assert!(try_write_field_u64(&mut chunk, ByteOrder::Big, 1).is_err());

    assert_eq!(try_read_be16(&chunk), Ok(0x0102));
    assert_eq!(try_read_le32(&chunk), Ok(0x0D02_0100));
}

#[test]
fn test_big_endian_write_back() {
    let mut header = [0u8; 12];
    header[..4].copy_from_slice(&marker_to_tag(make_marker(b'F', b'O', b'R', b'M')));
    write_field_u32(&mut header[4..], ByteOrder::Big, 4096);
    header[8..].copy_from_slice(b"AIFF");

    assert_eq!(&header[..4], b"FORM");
    assert_eq!(&header[4..8], &[0x00, 0x00, 0x10, 0x00]);
    assert_eq!(read_field_be32(&header[4..]), 4096);
    assert_eq!(be_to_host_32(u32::from_ne_bytes([0, 0, 0x10, 0])), 4096);
}

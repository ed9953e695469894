//! PCM to WAV container wrapping.
//!
//! Writes the canonical 44-byte RIFF/WAVE header and copies the payload
//! verbatim. No resampling or re-encoding happens here, so identical input
//! always yields byte-identical output.

use crate::domain::audio::{PcmAudio, WavContainer, WAV_HEADER_LEN};

const PCM_FMT_CHUNK_SIZE: u32 = 16;
const PCM_FORMAT_TAG: u16 = 1;

pub fn encode(audio: &PcmAudio) -> WavContainer {
    let mut buffer = Vec::with_capacity(WAV_HEADER_LEN + audio.samples().len());
    buffer.extend_from_slice(&header(audio));
    buffer.extend_from_slice(audio.samples());
    WavContainer::from_bytes(buffer)
}

/// The 44-byte RIFF/WAVE header describing `audio`'s payload.
fn header(audio: &PcmAudio) -> [u8; WAV_HEADER_LEN] {
    // PcmAudio guarantees the payload fits a u32 with room for the header.
    let data_size = audio.samples().len() as u32;

    let mut header = [0u8; WAV_HEADER_LEN];
    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&(36 + data_size).to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&PCM_FMT_CHUNK_SIZE.to_le_bytes());
    header[20..22].copy_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    header[22..24].copy_from_slice(&audio.channels().to_le_bytes());
    header[24..28].copy_from_slice(&audio.sample_rate().to_le_bytes());
    header[28..32].copy_from_slice(&audio.byte_rate().to_le_bytes());
    header[32..34].copy_from_slice(&audio.block_align().to_le_bytes());
    header[34..36].copy_from_slice(&audio.bits_per_sample().to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());
    header
}

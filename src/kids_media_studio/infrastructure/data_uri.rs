use super::error::InfrastructureError;

/// Splits a `data:<mime>[;base64],<payload>` URI and base64-decodes the payload.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, InfrastructureError> {
    let (_, payload) = uri
        .split_once(',')
        .ok_or_else(|| InfrastructureError::DecodingError("Invalid data URL: missing comma".to_string()))?;
    base64::decode(payload.trim()).map_err(InfrastructureError::Base64DecodeError)
}

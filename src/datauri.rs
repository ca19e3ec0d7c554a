use crate::error::{Result, StudioError};

/// A parsed `data:<mime>;base64,<payload>` URI.
///
/// Images travel through the whole system as data URIs; this codec is the
/// single place where the MIME type and the base64 payload are pulled apart
/// or put back together. The payload is kept base64-encoded since that is
/// the form the service consumes and produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: String,
}

impl DataUri {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Parses a data URI. The MIME type is taken from the URI's declared
    /// type segment, never assumed.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| StudioError::DataUriError(format!("missing data: scheme: {}", uri)))?;

        let (header, data) = rest.split_once(',').ok_or_else(|| {
            StudioError::DataUriError("missing ',' separator in data URI".to_string())
        })?;

        let mime_type = header.strip_suffix(";base64").ok_or_else(|| {
            StudioError::DataUriError("data URI is not base64-encoded".to_string())
        })?;

        if mime_type.is_empty() {
            return Err(StudioError::DataUriError(
                "empty MIME type in data URI".to_string(),
            ));
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    /// Formats back into a data URI. `parse` and `to_uri` round-trip exactly.
    pub fn to_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

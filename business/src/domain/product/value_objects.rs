use super::errors::FieldError;

/// Largest image payload accepted for upload.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

pub const SUPPORTED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Server-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Zero is what the server reports for a record it never stored.
    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}

/// Image attached to a product on the server, without its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub file_name: Option<String>,
    pub content_type: String,
}

/// Binary image payload, validated for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct ProductImage {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ProductImage {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, FieldError> {
        let content_type = content_type.into().trim().to_ascii_lowercase();
        if !SUPPORTED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(FieldError::ImageUnsupportedType(content_type));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(FieldError::ImageTooLarge(bytes.len()));
        }

        Ok(Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        })
    }

    /// Constructor for images downloaded from the server (no validation).
    pub fn from_server(file_name: String, content_type: String, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for ProductImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Guesses an upload content type from a file extension.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

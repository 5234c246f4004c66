use std::fmt;

/// Declared column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
    Text,
    Float,
}

impl DataType {
    /// Keyword written to the text format and shown to users.
    pub fn keyword(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::Text => "TEXT",
            DataType::Float => "FLOAT",
        }
    }

    /// Tag stored in the binary format.
    pub fn tag(&self) -> i32 {
        match self {
            DataType::Int => 0,
            DataType::Text => 1,
            DataType::Float => 2,
        }
    }

    pub fn from_tag(tag: i32) -> Option<DataType> {
        match tag {
            0 => Some(DataType::Int),
            1 => Some(DataType::Text),
            2 => Some(DataType::Float),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Maps a type keyword to a declared type. Unknown keywords fall back to text.
pub fn parse_datatype(s: &str) -> DataType {
    match s.to_lowercase().as_str() {
        "int" | "integer" => DataType::Int,
        "float" | "real" => DataType::Float,
        _ => DataType::Text,
    }
}

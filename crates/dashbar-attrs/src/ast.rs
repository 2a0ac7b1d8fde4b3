// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value on the right of `key:`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"hello"`
    Str(String),
    /// Numeric literal: `16`, `-2`, `0.75`
    Number(f32),
    /// Color literal as straight-alpha bytes, from `#rrggbb` or `#rrggbbaa`.
    Color([u8; 4]),
    /// Unquoted identifier: enum-like values such as `linear`
    Ident(String),
}

impl Value {
    /// Human-readable kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` line inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based position of the key.
    pub line: usize,
    pub col: usize,
}

// ── Block ─────────────────────────────────────────────────────────────────

/// Attributes for one named target.
///
/// ```text
/// DashedProgressBar {
///     max_dash_count: 5
///     dash_color: #00ffff
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub props: Vec<Prop>,
}

impl Block {
    /// Look up a property by key. When a key repeats, the last one wins.
    pub fn prop(&self, key: &str) -> Option<&Prop> {
        self.props.iter().rev().find(|p| p.key == key)
    }

    /// Look up a property value by key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.prop(key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn number(&self, key: &str) -> Option<f32> {
        match self.value(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as straight RGBA bytes if it is a `Color`.
    pub fn color(&self, key: &str) -> Option<[u8; 4]> {
        match self.value(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }
}

// ── Sheet ─────────────────────────────────────────────────────────────────

/// The top-level parse result for an attribute sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    pub blocks: Vec<Block>,
}

impl Sheet {
    /// First block with the given name.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.name == name)
    }
}

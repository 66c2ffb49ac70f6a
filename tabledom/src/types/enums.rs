/// Explicit outer (border-box) size of an element along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Fixed(u16),
    #[default]
    Auto,
}

impl Size {
    pub const fn fixed(&self) -> Option<u16> {
        match self {
            Self::Fixed(n) => Some(*n),
            Self::Auto => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Div,
    Table,
    THead,
    TBody,
    TFoot,
    Tr,
    Th,
    Td,
}

impl Tag {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Table => "table",
            Self::THead => "thead",
            Self::TBody => "tbody",
            Self::TFoot => "tfoot",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let tag = match name.to_ascii_lowercase().as_str() {
            "div" => Self::Div,
            "table" => Self::Table,
            "thead" => Self::THead,
            "tbody" => Self::TBody,
            "tfoot" => Self::TFoot,
            "tr" => Self::Tr,
            "th" => Self::Th,
            "td" => Self::Td,
            _ => return None,
        };
        Some(tag)
    }

    pub const fn is_section(&self) -> bool {
        matches!(self, Self::THead | Self::TBody | Self::TFoot)
    }

    pub const fn is_cell(&self) -> bool {
        matches!(self, Self::Th | Self::Td)
    }
}

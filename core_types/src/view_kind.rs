use strum_macros::{Display, EnumIter};

use crate::CoreTypeError;

/// The two dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum ViewKind {
    #[strum(serialize = "List Fruits")]
    List,
    #[strum(serialize = "Extended Data")]
    Extended,
}

impl ViewKind {
    pub fn page_sizes(&self) -> &'static [PageSize] {
        match self {
            ViewKind::List => &[PageSize::Five, PageSize::Ten, PageSize::TwentyFive],
            ViewKind::Extended => &[PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty],
        }
    }

    pub fn default_page_size(&self) -> PageSize {
        PageSize::Ten
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ViewKind::List => "view-list-symbolic",
            ViewKind::Extended => "view-grid-symbolic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
#[repr(u8)]
pub enum PageSize {
    #[strum(serialize = "5")]
    Five = 5,
    #[strum(serialize = "10")]
    Ten = 10,
    #[strum(serialize = "25")]
    TwentyFive = 25,
    #[strum(serialize = "50")]
    Fifty = 50,
}

impl PageSize {
    pub fn rows(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for PageSize {
    type Error = CoreTypeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            50 => Ok(PageSize::Fifty),
            _ => Err(CoreTypeError::ConversionError(format!(
                "Unsupported page size: {}",
                value
            ))),
        }
    }
}

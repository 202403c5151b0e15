/// Which of the two raster buffers a render or draw refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    Full,
    Low,
}

impl Resolution {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Low => "low",
        }
    }
}

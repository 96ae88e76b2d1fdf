use std::fmt;

// ---------------------------------------------------------------------------
// Source – which remote endpoint supplies the dataset
// ---------------------------------------------------------------------------

/// The two remote record sources the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    /// Money records (`/api/mtl/getAllMoney`).
    Mtl,
    /// Asset investment records (`/api/mal/getAllAssetInvestments`).
    #[default]
    Mal,
}

impl Source {
    /// Toolbar order.
    pub const ALL: [Source; 2] = [Source::Mtl, Source::Mal];

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Source::Mtl => "MTL",
            Source::Mal => "MAL",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

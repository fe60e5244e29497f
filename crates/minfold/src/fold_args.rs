use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use mf_fold::{Dangles, FoldOptions};

/// Energy model switches shared by the folding binaries.
#[derive(Debug, Args)]
pub struct ModelArguments {
    /// Folding temperature in degrees Celsius.
    #[arg(short = 'T', long, default_value_t = 37.0)]
    pub temp: f64,

    /// Dangling end model (0, 1, 2 or 3).
    #[arg(short, long, default_value_t = 2)]
    pub dangles: u8,

    /// Disallow isolated base pairs.
    #[arg(long = "noLP")]
    pub no_lonely_pairs: bool,

    /// Disallow G-U pairs closing hairpin or multibranch loops.
    #[arg(long = "noGU")]
    pub no_gu_closure: bool,

    /// Allow G-quadruplexes as structure elements.
    #[arg(short, long)]
    pub gquad: bool,

    /// Ignore the tabulated tri-/tetra-/hexaloop energies.
    #[arg(long = "noTetra")]
    pub no_special_hairpins: bool,

    /// Read energy parameters from a file instead of the built-in tables.
    #[arg(short, long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

impl ModelArguments {
    pub fn build_options(&self) -> Result<FoldOptions> {
        let dangles = Dangles::try_from(self.dangles).map_err(anyhow::Error::msg)?;
        Ok(FoldOptions {
            temperature: self.temp,
            dangles,
            no_lonely_pairs: self.no_lonely_pairs,
            no_gu_closure: self.no_gu_closure,
            with_gquad: self.gquad,
            special_hairpins: !self.no_special_hairpins,
            parameter_file: self.params.clone(),
        })
    }
}

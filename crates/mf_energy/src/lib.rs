/// Base, NucleotideVec, PairType, ....
mod nucleotides;

/// Raw parameter tables (37 C free energies + enthalpies).
mod energy_tables;

/// Parameter file parsing into the raw tables.
pub mod parameter_parsing;

/// Built-in Mathews-Turner 1999 data.
mod turner;

/// Tables rescaled to a target temperature, ready for the recursions.
mod scaled;

/// Loop energy primitives: hairpin, interior, exterior & multibranch stems.
mod loop_energies;

pub use nucleotides::*;
pub use energy_tables::*;
pub use scaled::*;
pub use loop_energies::*;

/// Reading FASTA-like fold input from files, stdin, or strings.
pub mod input_parsers;

/// Clap argument groups shared by the binaries.
pub mod fold_args;

use std::path::{Path, PathBuf};

use clap::Subcommand;

pub mod names;
pub mod quest;

#[derive(Subcommand)]
pub enum Commands {
    /// Quest table operations (t_quest._dt <-> JSON)
    Quest {
        /// Input file (a .json input compiles, anything else decompiles)
        input: PathBuf,

        /// Output file (defaults to the input with its extension swapped)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compile to the binary table even without a .json extension
        #[arg(short, long)]
        compile: bool,

        /// Spaces per indent level in the emitted JSON
        #[arg(long, default_value = "2")]
        indent: usize,

        /// Recompile the decompiled document in memory and report drift
        #[arg(long, conflicts_with = "compile")]
        verify: bool,
    },

    /// Character name table operations (t_name._dt <-> JSON)
    Names {
        /// Input file (a .json input compiles, anything else decompiles)
        input: PathBuf,

        /// Output file (defaults to the input with its extension swapped)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compile to the binary table even without a .json extension
        #[arg(short, long)]
        compile: bool,

        /// Spaces per indent level in the emitted JSON
        #[arg(long, default_value = "2")]
        indent: usize,

        /// Recompile the decompiled document in memory and report drift
        #[arg(long, conflicts_with = "compile")]
        verify: bool,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Quest {
                input,
                output,
                compile,
                indent,
                verify,
            } => quest::execute(input, output.as_deref(), *compile, *indent, *verify),
            Commands::Names {
                input,
                output,
                compile,
                indent,
                verify,
            } => names::execute(input, output.as_deref(), *compile, *indent, *verify),
        }
    }
}

/// True when the path carries a `.json` extension, ignoring case
pub(crate) fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Pick the output path, defaulting to the input with `extension` swapped in
pub(crate) fn resolve_output(input: &Path, output: Option<&Path>, extension: &str) -> PathBuf {
    output.map_or_else(|| input.with_extension(extension), Path::to_path_buf)
}

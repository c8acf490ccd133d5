mod scratch_file;

pub use scratch_file::{SCRATCH_PREFIX, SCRATCH_SUFFIX, ScratchFile, TempScratchStore};

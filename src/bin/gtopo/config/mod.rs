use gmx_topo::io::AssembleConfig;

use crate::cli::IncludeOptions;

pub fn build_assemble_config(opts: &IncludeOptions) -> AssembleConfig {
    AssembleConfig {
        max_depth: (!opts.no_depth_limit).then_some(opts.max_depth),
    }
}

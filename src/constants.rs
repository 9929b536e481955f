/* prefix of environment variables that override cfg file settings */
pub const ENV_PREFIX: &str = "TREEPOINT";

/* nesting separator in those variables: TREEPOINT_SYS__THREADS -> sys.threads */
pub const ENV_SEPARATOR: &str = "__";

/* 0 lets rayon size the pool from the available cores */
pub const DEFAULT_THREADS: usize = 0;

pub const DEFAULT_ERROR_POLICY: &str = "abort";

/* failures echoed to the log before the run gives up */
pub const MAX_LOGGED_ERRORS: usize = 10;

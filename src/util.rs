use std::error::Error;

/// Rayon pool for a binning run; `n_threads == 0` keeps rayon's default size.
pub fn thread_pool(n_threads: usize) -> Result<rayon::ThreadPool, Box<dyn Error>> {

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("treepoint-{}", i))
        .build()?;

    Ok(pool)
}

/// Renders an error and all of its sources on one line.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {

    let mut chain = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }

    chain
}

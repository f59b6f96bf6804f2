use abre::{Config, Construction, Pattern};

pub const CONSTRUCTIONS: [Construction; 3] =
    [Construction::Thompson, Construction::Subset, Construction::Direct];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The same regex compiled with every construction
pub fn patterns(regex: &str) -> anyhow::Result<Vec<Pattern>> {
    init_logger();
    let mut patterns = Vec::new();
    for construction in CONSTRUCTIONS {
        let pattern = Pattern::builder()
            .configure(Config::new().construction(construction))
            .build(regex)?;
        patterns.push(pattern);
    }
    Ok(patterns)
}

/// Every string over {a, b} of length at most `max_len`, shortest first
pub fn strings(max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &frontier {
            for c in ['a', 'b'] {
                let mut t = s.clone();
                t.push(c);
                next.push(t);
            }
        }
        all.extend(next.iter().cloned());
        frontier = next;
    }
    all
}

/// Applique une contrainte souple : si elle vide le pool, on l'ignore.
pub(super) fn relax<'a, F>(pool: Vec<&'a str>, keep: F) -> Vec<&'a str>
where
    F: Fn(&str) -> bool,
{
    let narrowed: Vec<&str> = pool.iter().copied().filter(|name| keep(name)).collect();
    if narrowed.is_empty() {
        pool
    } else {
        narrowed
    }
}

/// Noms du pool ayant la charge minimale.
pub(super) fn least_loaded<'a, F>(pool: &[&'a str], load: F) -> Vec<&'a str>
where
    F: Fn(&str) -> u32,
{
    let Some(min) = pool.iter().map(|name| load(name)).min() else {
        return Vec::new();
    };
    pool.iter().copied().filter(|name| load(name) == min).collect()
}

fn normalize_token(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let m = b_chars.len();
    if a.is_empty() {
        return m;
    }
    if m == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0; m + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

fn score_candidate(input: &str, candidate: &str) -> Option<usize> {
    let a = normalize_token(input);
    let b = normalize_token(candidate);
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if a == b {
        return Some(0);
    }
    if a.contains(&b) || b.contains(&a) {
        return Some(1);
    }
    Some(levenshtein(&a, &b))
}

fn max_allowed_distance(input: &str) -> usize {
    match normalize_token(input).len() {
        0 => 0,
        1..=4 => 1,
        5..=8 => 2,
        n => ((n as f32) * 0.35).floor().max(3.0) as usize,
    }
}

/// Close matches for a mistyped name, best first.
pub fn suggest(input: &str, candidates: &[&str], limit: usize) -> Vec<String> {
    if input.trim().is_empty() || candidates.is_empty() {
        return Vec::new();
    }
    let allowed = max_allowed_distance(input);
    let mut scored: Vec<(&str, usize)> = candidates
        .iter()
        .filter_map(|cand| {
            score_candidate(input, cand)
                .filter(|score| *score <= allowed)
                .map(|score| (*cand, score))
        })
        .collect();
    scored.sort_by(|a, b| {
        a.1.cmp(&b.1)
            .then_with(|| a.0.len().cmp(&b.0.len()))
            .then_with(|| a.0.cmp(b.0))
    });

    let mut out: Vec<String> = Vec::new();
    for (cand, _) in scored {
        if out.iter().any(|existing| existing == cand) {
            continue;
        }
        out.push(cand.to_string());
        if out.len() >= limit.max(1) {
            break;
        }
    }
    out
}

use clap::Args;
use mi_profile::assessment::{
    catalog, insight, score, tips, ResponseSet, HIGHLIGHT_COUNT, MAX_RESPONSE, MIN_RESPONSE,
    QUESTION_COUNT,
};
use mi_profile::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Comma-separated answers for all 43 questions, in catalog order
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: Option<ResponseSet>,
    /// Uniform answer used when --answers is not given (1-4)
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub(crate) fill: u8,
}

/// Score a response set and print the ranked table the report page shows,
/// including the expanded copy for the top two domains.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let responses = args.answers.unwrap_or_else(|| {
        catalog::questions()
            .iter()
            .map(|question| (question.id, args.fill))
            .collect()
    });

    let scores = score(&responses);

    println!("Ranked intelligence profile");
    println!("{:<22} {:>7}", "Domain", "Score");
    for entry in &scores {
        let bar_width = (entry.percent / 100.0 * 40.0).round() as usize;
        println!(
            "{:<22} {:>6.1}%  {}",
            entry.domain.label(),
            entry.percent,
            "#".repeat(bar_width)
        );
    }

    println!();
    for (index, entry) in scores.iter().take(HIGHLIGHT_COUNT).enumerate() {
        println!("{}. {} Intelligence", index + 1, entry.domain.label());
        println!("   {}", insight(entry.domain));
        for tip in tips(entry.domain) {
            println!("   - {tip}");
        }
        println!();
    }

    Ok(())
}

fn parse_answers(raw: &str) -> Result<ResponseSet, String> {
    let values: Vec<u8> = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| format!("'{}' is not a number", part.trim()))
        })
        .collect::<Result<_, _>>()?;

    if values.len() != QUESTION_COUNT {
        return Err(format!(
            "expected {QUESTION_COUNT} answers, got {}",
            values.len()
        ));
    }
    if let Some(value) = values
        .iter()
        .find(|value| !(MIN_RESPONSE..=MAX_RESPONSE).contains(value))
    {
        return Err(format!("answer {value} is outside the 1-4 scale"));
    }

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| (index as u16 + 1, value))
        .collect())
}

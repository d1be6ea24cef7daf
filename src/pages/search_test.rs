use super::*;

#[test]
fn two_or_more_chars_trigger_a_fetch_with_trimmed_query() {
    assert_eq!(plan_for_query("  Dakar  "), SearchPlan::Fetch("Dakar".to_owned()));
    assert_eq!(plan_for_query("Mb"), SearchPlan::Fetch("Mb".to_owned()));
}

#[test]
fn empty_input_clears_results() {
    assert_eq!(plan_for_query(""), SearchPlan::Clear);
    assert_eq!(plan_for_query("   "), SearchPlan::Clear);
}

#[test]
fn single_char_waits_for_more_input() {
    assert_eq!(plan_for_query("D"), SearchPlan::Wait);
    assert_eq!(plan_for_query(" é "), SearchPlan::Wait);
}

#[test]
fn accented_chars_count_as_characters_not_bytes() {
    // "Fé" is three bytes but two characters; it must search.
    assert_eq!(plan_for_query("Fé"), SearchPlan::Fetch("Fé".to_owned()));
}

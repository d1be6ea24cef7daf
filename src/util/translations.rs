//! French display tables for backend enum-ish strings.
//!
//! The backend stores day names, languages and mass types in English; the
//! UI is entirely French. Unknown values pass through untranslated.

#[cfg(test)]
#[path = "translations_test.rs"]
mod translations_test;

/// Canonical display order for a weekly schedule, Sunday first.
pub const DAY_ORDER: [&str; 7] =
    ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

/// French day name for a backend day-of-week value.
pub fn day_name(day: &str) -> &str {
    match day {
        "Sunday" => "Dimanche",
        "Monday" => "Lundi",
        "Tuesday" => "Mardi",
        "Wednesday" => "Mercredi",
        "Thursday" => "Jeudi",
        "Friday" => "Vendredi",
        "Saturday" => "Samedi",
        other => other,
    }
}

/// French name for a celebration language.
pub fn language_name(language: &str) -> &str {
    match language {
        "French" => "Français",
        "Wolof" => "Wolof",
        "English" => "Anglais",
        "Serer" => "Sérère",
        "Portuguese" => "Portugais",
        "Spanish" => "Espagnol",
        "Italian" => "Italien",
        other => other,
    }
}

/// French label for a mass type, passing unknown labels through.
pub fn mass_type_name(mass_type: &str) -> &str {
    match mass_type {
        "Mass in Wolof" => "Messe en Wolof",
        "Mass in French" => "Messe en Français",
        "Mass in English" => "Messe en Anglais",
        "Mass in Portuguese" => "Messe en Portugais",
        "Mass in Serer" => "Messe en Sérère",
        "Main Mass" => "Messe principale",
        "Early Mass" | "Morning Mass" => "Messe du matin",
        "Evening Mass" => "Messe du soir",
        "Vigil Mass" => "Messe de vigile",
        "Weekday Mass" => "Messe en semaine",
        "Family Mass" => "Messe des familles",
        "Youth Mass" => "Messe des jeunes",
        "Children Mass" => "Messe des enfants",
        "Sunday Mass" => "Messe dominicale",
        "Daily Mass" => "Messe quotidienne",
        "Afternoon Mass" => "Messe de l'après-midi",
        other => other,
    }
}

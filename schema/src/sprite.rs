/// Normalise a species name into the key used to look up its sprite asset.
///
/// Replacements run in a fixed order on the lowercased name, so later steps
/// see the output of earlier ones. Characters outside this list pass through
/// unchanged.
pub fn sprite_key(species: &str) -> String {
    species
        .to_lowercase()
        .replace(' ', "-")
        .replace('.', "")
        .replace('\'', "")
        .replace('é', "e")
        .replace('♀', "-f")
        .replace('♂', "-m")
}

/// Turn a property identifier into a row label.
///
/// The first character is kept as is. Every later uppercase letter becomes a
/// space followed by its lowercase form, even when the previous character was
/// uppercase too, so `"ID"` turns into `"I d"`.
pub fn humanize(identifier: &str) -> String {
    let mut label = String::with_capacity(identifier.len() + 4);
    let mut chars = identifier.chars();

    if let Some(first) = chars.next() {
        label.push(first);
    }

    for c in chars {
        if c.is_uppercase() {
            label.push(' ');
            label.extend(c.to_lowercase());
        } else {
            label.push(c);
        }
    }

    label
}

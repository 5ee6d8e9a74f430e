/// Gets the extension of a filename, lower-cased.
///
/// Query strings and fragments are dropped first, so urls work too.
/// Everything after the first dot of the name is returned, which keeps
/// multi-part extensions such as `tar.gz` together. A dot in first position
/// marks a hidden file and never starts an extension.
pub fn get_extension(filename: &str) -> Option<String> {
    let name = strip_query_and_fragment(basename(filename));
    if name.is_empty() {
        return None;
    }

    let name = match name.rfind('\\') {
        Some(pos) => &name[pos + 1..],
        None => name,
    };

    let (dot, _) = name.char_indices().skip(1).find(|&(_, c)| c == '.')?;
    Some(name[dot + 1..].to_lowercase())
}

fn basename(filename: &str) -> &str {
    let trimmed = filename.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

fn strip_query_and_fragment(name: &str) -> &str {
    name.split(['?', '#']).next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("file.txt", Some("txt"))]
    #[case("FILE.TXT", Some("txt"))]
    #[case("archive.tar.gz", Some("tar.gz"))]
    #[case("a.b.c.txt", Some("b.c.txt"))]
    #[case(".hidden", None)]
    #[case(".hidden.conf", Some("conf"))]
    #[case("noextension", None)]
    #[case("", None)]
    #[case("/var/www/site.d/index", None)]
    #[case("/var/www/site/index.html", Some("html"))]
    #[case("C:\\Users\\me\\photo.JPG", Some("jpg"))]
    #[case("http://x.com/file.txt?x=1", Some("txt"))]
    #[case("http://x.com/file.txt#top", Some("txt"))]
    #[case("http://x.com/dir/?q=a.b", None)]
    #[case("dump.sql.gz/", Some("sql.gz"))]
    #[case("été.txt", Some("txt"))]
    fn get_extension_cases(#[case] filename: &str, #[case] expected: Option<&str>) {
        assert_eq!(get_extension(filename).as_deref(), expected);
    }
}

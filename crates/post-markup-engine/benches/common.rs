pub fn generate_post(paragraphs: usize) -> String {
    let base = "# Headline\n\n## Section\nThe vote passed **7 to 2** after a *long* session.\n> \"A __historic__ day,\" said the mayor.\n\nWork starts in `Q3`; the old plan is ~~shelved~~.\n";
    base.repeat(paragraphs)
}

pub fn generate_unclosed_markers(len: usize) -> String {
    "** a ~~ b __ c ` d ".repeat(len / 20 + 1)
}

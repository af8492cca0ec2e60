/// Example batch accepted by `import`.
pub const SAMPLE_GRANTS: &str = r#"[
  {
    "grant_name": "Sustainable Agriculture Research Grant",
    "grant_description": "Funding for projects that promote organic farming practices and soil conservation."
  },
  {
    "grant_name": "STEM Education Initiative",
    "grant_description": "Support for programs that encourage high school students to pursue careers in science, technology, engineering, and mathematics."
  }
]"#;

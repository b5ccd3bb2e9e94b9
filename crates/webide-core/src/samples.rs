//! Sample documents a fresh session starts with.

use crate::document::Document;
use crate::language::Language;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>My Project</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  <h1>Hello, World!</h1>
  <p>Welcome to my project</p>
  <script src="script.js"></script>
</body>
</html>"#;

const STYLES_CSS: &str = r#"body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  background-color: #f5f5f5;
}

h1 {
  color: #333;
}

p {
  color: #666;
}"#;

const SCRIPT_JS: &str = r#"// JavaScript code
console.log('Hello from script.js');

function greet(name) {
  return `Hello, ${name}!`;
}

document.addEventListener('DOMContentLoaded', () => {
  console.log(greet('Developer'));
});"#;

const MAIN_PY: &str = r#"# Python code
def greet(name):
    return f"Hello, {name}!"

if __name__ == "__main__":
    print(greet("Developer"))
    
# Example of a simple class
class Person:
    def __init__(self, name, age):
        self.name = name
        self.age = age
        
    def introduce(self):
        return f"My name is {self.name} and I am {self.age} years old.""#;

/// Returns the sample project: a page, its stylesheet and script, and a
/// Python file.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("index.html", Language::Html, INDEX_HTML),
        Document::new("styles.css", Language::Css, STYLES_CSS),
        Document::new("script.js", Language::JavaScript, SCRIPT_JS),
        Document::new("main.py", Language::Python, MAIN_PY),
    ]
}

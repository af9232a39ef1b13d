//! Portfolio content pages and social links.

use termfolio_vfs::{ABOUT_TXT, CONTACT_TXT, EXPERIENCE_TXT, PROJECTS_TXT, SKILLS_TXT};

use crate::interpreter::{CommandEntry, CommandRegistry};

const GITHUB: &str = "Opening GitHub profile...

https://github.com/d2Dreamer

Check out my repositories and contributions!";

const LINKEDIN: &str = "Opening LinkedIn profile...

https://www.linkedin.com/in/jhughes-dev

Connect with me on LinkedIn!";

const EMAIL: &str = "joe@investinsight.io

Feel free to reach out for opportunities or collaboration!";

const SOCIAL: &str = "SOCIAL MEDIA & LINKS
====================

GitHub: https://github.com/d2Dreamer
LinkedIn: https://www.linkedin.com/in/jhughes-dev
Website: https://jhugh.es
Email: jhughes2702@gmail.com

Follow me for updates on my latest projects and tech insights!";

const RESUME: &str = "Opening resume...

Coming soon

Alternatively, use 'cat contact.txt' for contact information.";

/// Register the content pages (same text as their `.txt` files) and the
/// social link commands.
pub fn register_content_commands(reg: &mut CommandRegistry) {
    let pages = [
        ("about", "Learn about me", ABOUT_TXT),
        ("experience", "View my work experience", EXPERIENCE_TXT),
        ("skills", "View my technical skills", SKILLS_TXT),
        ("projects", "View my projects", PROJECTS_TXT),
        ("contact", "Get my contact information", CONTACT_TXT),
    ];
    for (name, description, text) in pages {
        reg.register(CommandEntry::constant(name, description, "content", text));
    }

    let links = [
        ("github", "Open GitHub profile", GITHUB),
        ("linkedin", "Open LinkedIn profile", LINKEDIN),
        ("email", "Show email address", EMAIL),
        ("social", "Show all social media links", SOCIAL),
        ("resume", "Download resume", RESUME),
        ("cv", "Download resume", RESUME),
    ];
    for (name, description, text) in links {
        reg.register(CommandEntry::constant(name, description, "social", text));
    }
}

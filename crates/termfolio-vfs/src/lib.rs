//! Virtual file table.
//!
//! The console has no real file system. Each "file" is a named constant
//! document; `ls`, `cat`, `tree` and tab completion all read the same
//! insertion-ordered [`FileTable`].

mod portfolio;
mod table;

pub use portfolio::{
    ABOUT_TXT, CONTACT_TXT, EXPERIENCE_TXT, HELP_TXT, PROJECTS_TXT, README_MD, SKILLS_TXT,
    portfolio_files,
};
pub use table::{FileTable, VirtualFile, file_tag};

use std::io::{BufRead, Write};

use crate::core::catalog;
use crate::core::index::CourseIndex;
use crate::core::loader::CatalogLoader;
use crate::domain::model::Course;
use crate::domain::ports::CourseSource;
use crate::utils::error::Result;

/// Interactive menu over one catalog index. Input and output are injected so
/// sessions can be scripted; the binary hands it stdin and stdout.
pub struct Menu<S: CourseSource, R: BufRead, W: Write> {
    loader: CatalogLoader<S>,
    index: CourseIndex,
    input: R,
    output: W,
}

impl<S: CourseSource, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(source: S, index: CourseIndex, input: R, output: W) -> Self {
        Self {
            loader: CatalogLoader::new(source),
            index,
            input,
            output,
        }
    }

    pub fn index(&self) -> &CourseIndex {
        &self.index
    }

    /// Hands back the writer, e.g. to inspect a scripted session.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                // End of input behaves like choosing exit.
                break;
            };

            match choice.trim() {
                "1" => self.handle_load()?,
                "2" => self.handle_list()?,
                "3" => self.handle_find()?,
                "9" => {
                    writeln!(self.output, "Exiting program")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Load file data")?;
        writeln!(self.output, "2. Print alphabetically ordered list of courses")?;
        writeln!(self.output, "3. Print course information and prerequisites")?;
        writeln!(self.output, "9. Exit")?;
        self.output.flush()?;
        Ok(())
    }

    fn handle_load(&mut self) -> Result<()> {
        write!(self.output, "Enter file name: ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let path = line.trim();

        match self.loader.load(path, &mut self.index) {
            Ok(report) => {
                for number in &report.rejected_lines {
                    writeln!(self.output, "Error: Invalid file format (line {})", number)?;
                }
                writeln!(self.output, "Loaded {} courses", report.loaded)?;
            }
            Err(error) => {
                tracing::error!("Unable to open {}: {}", path, error);
                writeln!(self.output, "Error: Unable to open the file")?;
            }
        }
        Ok(())
    }

    fn handle_list(&mut self) -> Result<()> {
        let courses = catalog::list_all_sorted(&self.index);
        for course in courses {
            write_course(&mut self.output, course)?;
        }
        Ok(())
    }

    fn handle_find(&mut self) -> Result<()> {
        write!(self.output, "Enter course number: ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };
        let identifier = line.trim();

        match catalog::find_by_identifier(&self.index, identifier) {
            Some(course) => write_course(&mut self.output, course)?,
            None => writeln!(self.output, "Course not found")?,
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buffer = String::new();
        let bytes = self.input.read_line(&mut buffer)?;
        if bytes == 0 {
            Ok(None)
        } else {
            Ok(Some(buffer))
        }
    }
}

fn write_course<W: Write>(output: &mut W, course: &Course) -> Result<()> {
    writeln!(output, "Course Number: {}", course.identifier)?;
    writeln!(output, "Course Title: {}", course.title)?;
    writeln!(output, "Prerequisites: {}", course.prerequisites_display())?;
    Ok(())
}

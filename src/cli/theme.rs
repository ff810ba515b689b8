use crossterm::style::{Color, StyledContent, Stylize};

/// Colors for the labels the CLI prints around each grid.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub label: Color,
    pub number: Color,
    pub separator: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            label: Color::Rgb {
                r: 169,
                g: 177,
                b: 214,
            },
            number: Color::Rgb {
                r: 247,
                g: 118,
                b: 142,
            },
            separator: Color::Rgb {
                r: 100,
                g: 110,
                b: 150,
            },
        }
    }

    pub fn label<'a>(&self, text: &'a str) -> StyledContent<&'a str> {
        text.with(self.label).bold()
    }

    pub fn number(&self, text: String) -> StyledContent<String> {
        text.with(self.number)
    }

    pub fn separator<'a>(&self, text: &'a str) -> StyledContent<&'a str> {
        text.with(self.separator)
    }
}

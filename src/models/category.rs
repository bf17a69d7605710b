use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Alimentacao,
    Transporte,
    Moradia,
    Saude,
    Educacao,
    Lazer,
    Roupas,
    Servicos,
    Investimentos,
    Outros,
}

impl Category {
    // Fixed set, presented in this order everywhere (selection list, summary export).
    pub const ALL: [Category; 10] = [
        Category::Alimentacao,
        Category::Transporte,
        Category::Moradia,
        Category::Saude,
        Category::Educacao,
        Category::Lazer,
        Category::Roupas,
        Category::Servicos,
        Category::Investimentos,
        Category::Outros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Alimentacao => "Alimentação",
            Category::Transporte => "Transporte",
            Category::Moradia => "Moradia",
            Category::Saude => "Saúde",
            Category::Educacao => "Educação",
            Category::Lazer => "Lazer",
            Category::Roupas => "Roupas",
            Category::Servicos => "Serviços",
            Category::Investimentos => "Investimentos",
            Category::Outros => "Outros",
        }
    }

    // Unaccented spelling accepted so the category can be typed on any keyboard.
    fn ascii_label(&self) -> &'static str {
        match self {
            Category::Alimentacao => "Alimentacao",
            Category::Transporte => "Transporte",
            Category::Moradia => "Moradia",
            Category::Saude => "Saude",
            Category::Educacao => "Educacao",
            Category::Lazer => "Lazer",
            Category::Roupas => "Roupas",
            Category::Servicos => "Servicos",
            Category::Investimentos => "Investimentos",
            Category::Outros => "Outros",
        }
    }

    pub fn from_label(label: &str) -> Result<Category, String> {
        let label = label.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| {
                category.label().eq_ignore_ascii_case(label)
                    || category.ascii_label().eq_ignore_ascii_case(label)
            })
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}'. Valid categories are: {}",
                    label,
                    Category::ALL
                        .iter()
                        .map(|c| c.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

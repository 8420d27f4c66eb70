// crates/cli/src/locale.rs
//! Display labels for the statistics tables.
//!
//! The locale is resolved once in `main` and handed to the presentation
//! layer as a value.

/// Label set for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub name: &'static str,
    pub statistic: &'static str,
    pub none_project: &'static str,
    pub path: &'static str,
    pub sum: &'static str,
    pub language: &'static str,
    pub files: &'static str,
    pub lines: &'static str,
    pub code: &'static str,
    pub comment: &'static str,
    pub blank: &'static str,
    pub avg: &'static str,
    pub max: &'static str,
    pub min: &'static str,
}

const EN_LABELS: Labels = Labels {
    name: "English",
    statistic: "statistic",
    none_project: "no files to count",
    path: "path",
    sum: "sum",
    language: "type",
    files: "files",
    lines: "lines",
    code: "code",
    comment: "comment",
    blank: "blank",
    avg: "avg",
    max: "max",
    min: "min",
};

const ZH_CN_LABELS: Labels = Labels {
    name: "中文简体",
    statistic: "项目统计",
    none_project: "没有可统计的文件",
    path: "路径",
    sum: "总计",
    language: "类型",
    files: "文件",
    lines: "行数",
    code: "代码",
    comment: "注释",
    blank: "空行",
    avg: "平均行数",
    max: "最大行数",
    min: "最小行数",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    id: &'static str,
    labels: &'static Labels,
}

impl Default for Locale {
    fn default() -> Self {
        Self::EN
    }
}

impl Locale {
    pub const EN: Self = Self {
        id: "en",
        labels: &EN_LABELS,
    };
    pub const ZH_CN: Self = Self {
        id: "zh-cn",
        labels: &ZH_CN_LABELS,
    };

    const ALL: [Self; 2] = [Self::EN, Self::ZH_CN];

    /// Looks up a locale id such as `zh-cn`, `zh_CN.UTF-8` or `en_US`.
    ///
    /// The full id is tried first, then the language part alone, so `zh`
    /// and `zh_TW` both get the `zh-cn` labels.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = id
            .split('.')
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-")
            .to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|l| l.id == normalized)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|l| l.id.split('-').next() == Some(language))
            })
    }

    /// Picks the requested locale, then the environment's, then English.
    #[must_use]
    pub fn resolve(requested: Option<&str>, env_lang: Option<&str>) -> Self {
        if let Some(id) = requested {
            return Self::from_id(id).unwrap_or_else(|| {
                log::warn!("no labels for locale '{id}', using en");
                Self::EN
            });
        }
        env_lang.and_then(Self::from_id).unwrap_or(Self::EN)
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    #[must_use]
    pub const fn labels(&self) -> &'static Labels {
        self.labels
    }
}

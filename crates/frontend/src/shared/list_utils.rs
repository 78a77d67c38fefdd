/// Утилиты для страниц-списков (поиск, подсветка, фасеты)
use contracts::shared::choice::Choice;
use contracts::shared::list_filter::FACET_ALL;
use leptos::prelude::*;
use thaw::Select;

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Байтовые диапазоны совпадений запроса в тексте (без учёта регистра,
/// без пересечений). Пустой запрос совпадений не даёт.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().map(fold).collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let hit = needle
            .iter()
            .zip(&chars[i..])
            .all(|(n, (_, c))| *n == fold(*c));
        if hit {
            let start = chars[i].0;
            let end = chars
                .get(i + needle.len())
                .map_or(text.len(), |(pos, _)| *pos);
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки. Фильтр пересчитывается на каждый ввод.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Tìm kiếm...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            {crate::shared::icons::icon("search")}
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| value.set(String::new())
                    title="Xóa"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Опции фасета из перечисления: (ключ, подпись)
pub fn choice_options<T: Choice>() -> Vec<(String, String)> {
    T::ALL
        .iter()
        .map(|c| (c.key().to_string(), c.label().to_string()))
        .collect()
}

/// Опции фасета из строковых значений списка
pub fn text_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Выпадающий список фасета с вариантом "все"
#[component]
pub fn FacetSelect(
    value: RwSignal<String>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    all_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="facet-select">
            <Select value=value>
                <option value=FACET_ALL>{all_label}</option>
                {move || options.get().into_iter().map(|(key, label)| view! {
                    <option value=key>{label}</option>
                }).collect_view()}
            </Select>
        </div>
    }
}

/// Пустое состояние таблицы
#[component]
pub fn EmptyState(#[prop(optional, into)] message: String) -> impl IntoView {
    let message = if message.is_empty() {
        "Không tìm thấy kết quả phù hợp".to_string()
    } else {
        message
    };
    view! {
        <div class="empty-state">
            {crate::shared::icons::icon("inbox")}
            <span>{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("iPhone 15 Pro", "PRO"), vec![(10, 13)]);
        assert_eq!(match_ranges("abcabc", "bc"), vec![(1, 3), (4, 6)]);
    }

    #[test]
    fn test_match_ranges_multibyte() {
        let text = "Điện thoại ĐIỆN";
        let ranges = match_ranges(text, "điện");
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].0..ranges[0].1], "Điện");
        assert_eq!(&text[ranges[1].0..ranges[1].1], "ĐIỆN");
    }

    #[test]
    fn test_match_ranges_empty_query() {
        assert!(match_ranges("anything", "   ").is_empty());
        assert!(match_ranges("", "a").is_empty());
    }
}

// User-facing strings. The UI ships with a single locale, pt-BR.

use crate::time_format::{Direction, Distance};

pub const REQUIRED_FIELD: &str = "Esse campo é obrigatório.";
pub const FORM_TITLE: &str = "Deixe seu feedback";
pub const FORM_PLACEHOLDER: &str = "Deixe um comentário ... ";
pub const SUBMIT_LABEL: &str = "Publicar";
pub const COMMENTER_LABEL: &str = "Você";
pub const APPLAUD_LABEL: &str = "Aplaudir";
pub const DELETE_LABEL: &str = "Deletar comentário";
pub const COMPOSER_HINTS: &str =
    "Enter publica, Alt+Enter quebra linha, Ctrl+T mostra a data, Tab vai aos comentários";
pub const COMMENTS_HINTS: &str =
    "j/k navega, l aplaude, d deleta, t mostra a data, Tab escreve, q sai";

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{count}", &count.to_string())
    }
}

pub fn distance_phrase(distance: Distance) -> String {
    match distance {
        Distance::LessThanXMinutes(n) => plural(n, "menos de um minuto", "menos de {count} minutos"),
        Distance::XMinutes(n) => plural(n, "1 minuto", "{count} minutos"),
        Distance::AboutXHours(n) => plural(n, "cerca de 1 hora", "cerca de {count} horas"),
        Distance::XDays(n) => plural(n, "1 dia", "{count} dias"),
        Distance::AboutXMonths(n) => plural(n, "cerca de 1 mês", "cerca de {count} meses"),
        Distance::XMonths(n) => plural(n, "1 mês", "{count} meses"),
        Distance::AboutXYears(n) => plural(n, "cerca de 1 ano", "cerca de {count} anos"),
        Distance::OverXYears(n) => plural(n, "mais de 1 ano", "mais de {count} anos"),
        Distance::AlmostXYears(n) => plural(n, "quase 1 ano", "quase {count} anos"),
    }
}

pub fn relative_time(distance: Distance, direction: Direction) -> String {
    let phrase = distance_phrase(distance);
    match direction {
        Direction::Past => format!("há {}", phrase),
        Direction::Future => format!("em {}", phrase),
    }
}

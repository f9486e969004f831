//! Static per-language calendar names and sheet labels.
//!
//! All tables are `static` data: nothing is initialized at runtime, so any
//! number of threads can read them without synchronization.

use crate::errors::AppResult;
use crate::models::language::Language;
use crate::models::workday::Workday;

/// Fixed captions printed on the sheet.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub name: &'static str,
    pub month_year: &'static str,
    pub date: &'static str,
    pub day: &'static str,
    pub entry_time: &'static str,
    pub exit_time: &'static str,
    pub total_hours: &'static str,
    pub balance: &'static str,
    pub total: &'static str,
    pub employee: &'static str,
    pub supervisor: &'static str,
    pub employee_signature: &'static str,
    pub supervisor_signature: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    /// Monday first.
    pub weekdays: [&'static str; 7],
    /// January first.
    pub months: [&'static str; 12],
    pub labels: Labels,
}

impl LocaleData {
    /// `idx` is Monday-first, 0..=6; anything else has no name.
    pub fn weekday_name(&self, idx: usize) -> Option<&'static str> {
        self.weekdays.get(idx).copied()
    }

    pub fn workday_name(&self, day: Workday) -> &'static str {
        self.weekdays[day.index()]
    }

    /// `month` is 1..=12; 0 and 13+ have no name.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        let idx = usize::try_from(month.checked_sub(1)?).ok()?;
        self.months.get(idx).copied()
    }
}

static SPANISH: LocaleData = LocaleData {
    weekdays: [
        "Lunes",
        "Martes",
        "Miércoles",
        "Jueves",
        "Viernes",
        "Sábado",
        "Domingo",
    ],
    months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
    labels: Labels {
        title: "HOJA DE CONTROL DE ASISTENCIA",
        name: "Nombre:",
        month_year: "Mes/Año:",
        date: "Fecha",
        day: "Día",
        entry_time: "Hora Entrada",
        exit_time: "Hora Salida",
        total_hours: "Total Horas",
        balance: "Saldo",
        total: "TOTAL",
        employee: "Empleado",
        supervisor: "Responsable",
        employee_signature: "Firma del Empleado",
        supervisor_signature: "Firma del Responsable",
    },
};

static PORTUGUESE: LocaleData = LocaleData {
    weekdays: [
        "Segunda-feira",
        "Terça-feira",
        "Quarta-feira",
        "Quinta-feira",
        "Sexta-feira",
        "Sábado",
        "Domingo",
    ],
    months: [
        "Janeiro",
        "Fevereiro",
        "Março",
        "Abril",
        "Maio",
        "Junho",
        "Julho",
        "Agosto",
        "Setembro",
        "Outubro",
        "Novembro",
        "Dezembro",
    ],
    labels: Labels {
        title: "FOLHA DE PONTO",
        name: "Nome:",
        month_year: "Mês/Ano:",
        date: "Data",
        day: "Dia",
        entry_time: "Hora Entrada",
        exit_time: "Hora Saída",
        total_hours: "Total Horas",
        balance: "Saldo",
        total: "TOTAL",
        employee: "Funcionário",
        supervisor: "Responsável",
        employee_signature: "Assinatura do Funcionário",
        supervisor_signature: "Assinatura do Responsável",
    },
};

static ENGLISH: LocaleData = LocaleData {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    labels: Labels {
        title: "ATTENDANCE CONTROL SHEET",
        name: "Name:",
        month_year: "Month/Year:",
        date: "Date",
        day: "Day",
        entry_time: "Entry Time",
        exit_time: "Exit Time",
        total_hours: "Total Hours",
        balance: "Balance",
        total: "TOTAL",
        employee: "Employee",
        supervisor: "Supervisor",
        employee_signature: "Employee Signature",
        supervisor_signature: "Supervisor Signature",
    },
};

pub fn lookup(language: Language) -> &'static LocaleData {
    match language {
        Language::Spanish => &SPANISH,
        Language::Portuguese => &PORTUGUESE,
        Language::English => &ENGLISH,
    }
}

/// Resolve a language code (`es`, `pt`, `en`) and return its table.
pub fn lookup_code(code: &str) -> AppResult<&'static LocaleData> {
    let language: Language = code.parse()?;
    Ok(lookup(language))
}

//! Справочники конфигурации полей: позиции (где поле выводится) и форматы
//! (как значение отображается). Обе сущности имеют одну форму записи и
//! различаются только перечислением вида.

pub mod aggregate;
pub mod format;
pub mod position;
pub mod samples;

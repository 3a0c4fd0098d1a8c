//! Built-in demo data: five users, two boards and the tasks of the first board.

use crate::context::Store;
use crate::types::{
    Board, BoardId, Checklist, ChecklistItem, Column, Comment, Priority, Task, Timestamp, User,
};
use indexmap::IndexMap;

/// A store populated with the demo data set
pub fn demo_store() -> Store {
    let mut store = Store {
        users: users(),
        boards: boards(),
        ..Store::default()
    };

    let website = BoardId::new(1);
    store.columns.insert(website, website_columns());
    store.tasks.insert(website, website_tasks());
    store
}

fn users() -> Vec<User> {
    vec![
        User::new("user-1", "Ana García", "Product Manager"),
        User::new("user-2", "Carlos López", "Frontend Developer"),
        User::new("user-3", "María Rodríguez", "Backend Developer"),
        User::new("user-4", "David Sánchez", "UI/UX Designer"),
        User::new("user-5", "Laura Martín", "QA Engineer"),
    ]
}

fn boards() -> Vec<Board> {
    let mut website = Board::new(
        BoardId::new(1),
        "Proyecto Website",
        "user-1".into(),
        Timestamp::from("2024-03-10"),
    )
    .with_description(
        "Desarrollo del nuevo sitio web corporativo con funcionalidades avanzadas de e-commerce",
    );
    website.created_at = None;
    website.members = ["user-1", "user-2", "user-3", "user-4", "user-5"]
        .into_iter()
        .map(Into::into)
        .collect();

    let mut marketing = Board::new(
        BoardId::new(2),
        "Marketing Q1",
        "user-2".into(),
        Timestamp::from("2024-03-09"),
    )
    .with_description("Campañas de marketing para el primer trimestre");
    marketing.created_at = None;
    marketing.members = vec!["user-1".into(), "user-2".into()];

    vec![website, marketing]
}

fn website_columns() -> Vec<Column> {
    vec![
        Column::new(1u64, "Backlog").with_tasks(["task-1", "task-2"]),
        Column::new(2u64, "En Progreso").with_tasks(["task-3"]),
        Column::new(3u64, "Blocked").with_tasks(["task-4"]),
        Column::new(4u64, "Sprint 1")
            .with_tasks(["task-5", "task-6", "task-11", "task-12", "task-13"]),
        Column::new(5u64, "Sprint 2")
            .with_tasks(["task-7", "task-8", "task-14", "task-15", "task-16"]),
        Column::new(6u64, "Sprint 3").with_tasks(["task-9", "task-10"]),
    ]
}

/// Fields every demo task sets
struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    due: &'static str,
    members: &'static [&'static str],
    labels: &'static [&'static str],
    estimate: f64,
    created_by: &'static str,
    created: &'static str,
    updated: &'static str,
}

impl Seed {
    fn build(self) -> Task {
        let mut task = Task::new(self.title, Timestamp::from(self.created))
            .with_id(self.id)
            .with_priority(self.priority)
            .with_estimate(self.estimate)
            .with_members(self.members.iter().copied())
            .with_labels(self.labels.iter().copied())
            .updated(Timestamp::from(self.updated));
        task.description = self.description.to_string();
        task.due_date = Some(self.due.to_string());
        task.created_by = Some(self.created_by.into());
        task
    }
}

fn checklist(id: &str, title: &str, items: &[(&str, &str, bool)]) -> Checklist {
    Checklist {
        id: id.into(),
        title: title.to_string(),
        items: items
            .iter()
            .map(|(id, text, completed)| ChecklistItem {
                id: (*id).into(),
                text: text.to_string(),
                completed: *completed,
            })
            .collect(),
    }
}

fn comment(id: &str, text: &str, author: &str, at: &str) -> Comment {
    let mut comment = Comment::new(text, author, Timestamp::from(at));
    comment.id = id.into();
    comment
}

fn website_tasks() -> IndexMap<crate::types::TaskId, Task> {
    let mut tasks = Vec::new();

    // Backlog
    let mut task = Seed {
        id: "task-1",
        title: "Implementar sistema de notificaciones",
        description: "Crear un sistema de notificaciones en tiempo real para alertas del sistema",
        priority: Priority::Medium,
        due: "2025-05-15",
        members: &["user-3"],
        labels: &["#0079BF", "#61BD4F"],
        estimate: 13.0,
        created_by: "user-1",
        created: "2025-03-20T10:00:00Z",
        updated: "2025-03-20T10:00:00Z",
    }
    .build();
    task.checklists.push(checklist(
        "checklist-1",
        "Funcionalidades requeridas",
        &[
            ("item-1-1", "Diseñar arquitectura de WebSockets", false),
            ("item-1-2", "Implementar servicio de notificaciones", false),
        ],
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-2",
        title: "Implementación de búsqueda avanzada",
        description: "Desarrollar sistema de búsqueda con filtros y autocompletado",
        priority: Priority::High,
        due: "2025-05-20",
        members: &["user-2", "user-3"],
        labels: &["#0079BF"],
        estimate: 21.0,
        created_by: "user-1",
        created: "2025-03-21T09:00:00Z",
        updated: "2025-03-21T09:00:00Z",
    }
    .build();
    task.checklists.push(checklist(
        "checklist-2",
        "Funcionalidades",
        &[
            ("item-2-1", "Implementar indexación", false),
            ("item-2-2", "Desarrollar filtros avanzados", false),
            ("item-2-3", "Integrar autocompletado", false),
        ],
    ));
    tasks.push(task);

    // In progress
    let mut task = Seed {
        id: "task-3",
        title: "Integración con API de analytics",
        description: "Conectar con servicios externos de analytics",
        priority: Priority::Medium,
        due: "2025-04-10",
        members: &["user-3"],
        labels: &["#0079BF"],
        estimate: 13.0,
        created_by: "user-1",
        created: "2025-03-20T10:00:00Z",
        updated: "2025-03-21T15:00:00Z",
    }
    .build();
    task.checklists.push(checklist(
        "checklist-3",
        "Tareas",
        &[
            ("item-3-1", "Configurar API keys", true),
            ("item-3-2", "Implementar tracking events", false),
        ],
    ));
    tasks.push(task);

    // Blocked
    let mut task = Seed {
        id: "task-4",
        title: "Optimización de rendimiento",
        description: "Mejorar el rendimiento general de la aplicación",
        priority: Priority::High,
        due: "2025-04-05",
        members: &["user-2"],
        labels: &["#EB5A46", "#F2D600"],
        estimate: 8.0,
        created_by: "user-1",
        created: "2025-03-20T09:00:00Z",
        updated: "2025-03-21T14:00:00Z",
    }
    .build()
    .mark_blocked();
    task.block_reason = Some("Pendiente de análisis de métricas de producción".to_string());
    task.checklists.push(checklist(
        "checklist-4",
        "Optimizaciones",
        &[
            ("item-4-1", "Análisis de performance", true),
            ("item-4-2", "Optimizar carga de imágenes", false),
        ],
    ));
    task.comments.push(comment(
        "comment-4-1",
        "Bloqueado hasta tener datos completos de métricas en producción",
        "user-2",
        "2025-03-21T14:00:00Z",
    ));
    tasks.push(task);

    // Sprint 1
    let mut task = Seed {
        id: "task-5",
        title: "Diseño UI/UX Homepage",
        description: "Crear el diseño visual de la nueva página principal",
        priority: Priority::High,
        due: "2025-02-15",
        members: &["user-4"],
        labels: &["#61BD4F"],
        estimate: 8.0,
        created_by: "user-4",
        created: "2025-02-10T09:00:00Z",
        updated: "2025-02-15T15:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-02-15T15:00:00Z"));
    task.checklists.push(checklist(
        "checklist-5",
        "Entregables de diseño",
        &[
            ("item-5-1", "Wireframes", true),
            ("item-5-2", "Mockups en Figma", true),
            ("item-5-3", "Prototipo interactivo", true),
        ],
    ));
    task.comments.push(comment(
        "comment-5-1",
        "Diseños aprobados por el cliente",
        "user-1",
        "2025-02-15T15:00:00Z",
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-6",
        title: "Configuración inicial del proyecto",
        description: "Setup del proyecto con Next.js y configuración del entorno de desarrollo",
        priority: Priority::High,
        due: "2025-02-12",
        members: &["user-2"],
        labels: &["#61BD4F"],
        estimate: 5.0,
        created_by: "user-2",
        created: "2025-02-11T09:00:00Z",
        updated: "2025-02-12T16:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-02-12T16:00:00Z"));
    task.checklists.push(checklist(
        "checklist-6",
        "Setup",
        &[
            ("item-6-1", "Inicializar proyecto Next.js", true),
            ("item-6-2", "Configurar ESLint y Prettier", true),
            ("item-6-3", "Configurar CI/CD", true),
        ],
    ));
    task.comments.push(comment(
        "comment-6-1",
        "Pipeline de CI configurado y funcionando",
        "user-2",
        "2025-02-12T16:00:00Z",
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-11",
        title: "Documentación inicial del proyecto",
        description: "Crear documentación básica del proyecto incluyendo guías de desarrollo y estándares de código",
        priority: Priority::Low,
        due: "2025-02-14",
        members: &["user-2"],
        labels: &["#61BD4F"],
        estimate: 3.0,
        created_by: "user-2",
        created: "2025-02-11T10:00:00Z",
        updated: "2025-02-14T11:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-02-14T11:00:00Z"));
    task.checklists.push(checklist(
        "checklist-11",
        "Documentación requerida",
        &[
            ("item-11-1", "Guía de instalación", true),
            ("item-11-2", "Estándares de código", true),
            ("item-11-3", "Estructura del proyecto", true),
        ],
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-12",
        title: "Configuración de tests unitarios",
        description: "Configurar Jest y React Testing Library para pruebas unitarias",
        priority: Priority::Medium,
        due: "2025-02-13",
        members: &["user-2"],
        labels: &["#61BD4F"],
        estimate: 5.0,
        created_by: "user-2",
        created: "2025-02-12T09:00:00Z",
        updated: "2025-02-13T16:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-02-13T16:00:00Z"));
    task.checklists.push(checklist(
        "checklist-12",
        "Setup de testing",
        &[
            ("item-12-1", "Configurar Jest", true),
            ("item-12-2", "Configurar React Testing Library", true),
            ("item-12-3", "Crear tests de ejemplo", true),
        ],
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-13",
        title: "Configuración de variables de entorno",
        description: "Establecer variables de entorno para diferentes ambientes",
        priority: Priority::Low,
        due: "2025-02-13",
        members: &["user-2"],
        labels: &["#61BD4F"],
        estimate: 2.0,
        created_by: "user-2",
        created: "2025-02-13T09:00:00Z",
        updated: "2025-02-13T11:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-02-13T11:00:00Z"));
    task.checklists.push(checklist(
        "checklist-13",
        "Configuración",
        &[
            ("item-13-1", "Crear archivo .env.example", true),
            ("item-13-2", "Documentar variables", true),
        ],
    ));
    tasks.push(task);

    // Sprint 2
    let mut task = Seed {
        id: "task-7",
        title: "Desarrollo Frontend - Homepage",
        description: "Implementar el nuevo diseño de la página principal con componentes React",
        priority: Priority::High,
        due: "2025-03-05",
        members: &["user-2", "user-4"],
        labels: &["#61BD4F"],
        estimate: 16.0,
        created_by: "user-1",
        created: "2025-02-20T09:00:00Z",
        updated: "2025-03-05T16:30:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-03-05T16:30:00Z"));
    task.checklists.push(checklist(
        "checklist-7",
        "Componentes principales",
        &[
            ("item-7-1", "Header responsive", true),
            ("item-7-2", "Hero section", true),
            ("item-7-3", "Catálogo de productos", true),
            ("item-7-4", "Footer con newsletter", true),
        ],
    ));
    task.comments.push(comment(
        "comment-7-1",
        "Desarrollo completado y aprobado por el cliente",
        "user-2",
        "2025-03-05T16:30:00Z",
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-8",
        title: "Implementar autenticación OAuth",
        description: "Integrar inicio de sesión con Google y Facebook",
        priority: Priority::High,
        due: "2025-03-10",
        members: &["user-3"],
        labels: &["#61BD4F"],
        estimate: 8.0,
        created_by: "user-1",
        created: "2025-03-01T09:00:00Z",
        updated: "2025-03-10T15:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-03-10T15:00:00Z"));
    task.checklists.push(checklist(
        "checklist-8",
        "Proveedores",
        &[
            ("item-8-1", "Configurar Google OAuth", true),
            ("item-8-2", "Configurar Facebook OAuth", true),
        ],
    ));
    task.comments.push(comment(
        "comment-8-1",
        "Autenticación implementada y probada correctamente",
        "user-3",
        "2025-03-10T15:00:00Z",
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-14",
        title: "Implementación de componentes base",
        description: "Crear biblioteca de componentes base reutilizables",
        priority: Priority::Medium,
        due: "2025-03-01",
        members: &["user-2", "user-4"],
        labels: &["#61BD4F"],
        estimate: 13.0,
        created_by: "user-4",
        created: "2025-02-20T09:00:00Z",
        updated: "2025-03-01T15:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-03-01T15:00:00Z"));
    task.checklists.push(checklist(
        "checklist-14",
        "Componentes",
        &[
            ("item-14-1", "Botones y variantes", true),
            ("item-14-2", "Inputs y forms", true),
            ("item-14-3", "Cards y containers", true),
            ("item-14-4", "Documentación en Storybook", true),
        ],
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-15",
        title: "Optimización de imágenes",
        description: "Implementar sistema de optimización y lazy loading de imágenes",
        priority: Priority::Low,
        due: "2025-03-03",
        members: &["user-2"],
        labels: &["#61BD4F"],
        estimate: 5.0,
        created_by: "user-2",
        created: "2025-03-01T09:00:00Z",
        updated: "2025-03-03T14:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-03-03T14:00:00Z"));
    task.checklists.push(checklist(
        "checklist-15",
        "Optimizaciones",
        &[
            ("item-15-1", "Configurar next/image", true),
            ("item-15-2", "Implementar lazy loading", true),
            ("item-15-3", "Optimizar formatos de imagen", true),
        ],
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-16",
        title: "Implementación de breadcrumbs",
        description: "Crear sistema de navegación con breadcrumbs",
        priority: Priority::Low,
        due: "2025-03-04",
        members: &["user-2"],
        labels: &["#61BD4F"],
        estimate: 3.0,
        created_by: "user-2",
        created: "2025-03-03T09:00:00Z",
        updated: "2025-03-04T11:00:00Z",
    }
    .build()
    .mark_completed(Timestamp::from("2025-03-04T11:00:00Z"));
    task.checklists.push(checklist(
        "checklist-16",
        "Implementación",
        &[
            ("item-16-1", "Crear componente Breadcrumb", true),
            ("item-16-2", "Integrar con next/navigation", true),
        ],
    ));
    tasks.push(task);

    // Sprint 3
    let mut task = Seed {
        id: "task-9",
        title: "Implementar sistema de reportes",
        description: "Desarrollar sistema de reportes y analytics para administradores",
        priority: Priority::High,
        due: "2025-04-15",
        members: &["user-2", "user-3"],
        labels: &["#0079BF"],
        estimate: 21.0,
        created_by: "user-1",
        created: "2025-03-20T11:00:00Z",
        updated: "2025-03-22T10:00:00Z",
    }
    .build();
    task.checklists.push(checklist(
        "checklist-9",
        "Funcionalidades requeridas",
        &[
            ("item-9-1", "Diseñar dashboard", true),
            ("item-9-2", "Implementar gráficas", false),
        ],
    ));
    task.comments.push(comment(
        "comment-9-1",
        "Diseño del dashboard aprobado, comenzando implementación",
        "user-2",
        "2025-03-22T10:00:00Z",
    ));
    tasks.push(task);

    let mut task = Seed {
        id: "task-10",
        title: "Integración de sistema de pagos",
        description: "Implementar pasarela de pago con Stripe y PayPal",
        priority: Priority::Medium,
        due: "2025-04-20",
        members: &["user-2", "user-3"],
        labels: &["#0079BF", "#F2D600"],
        estimate: 13.0,
        created_by: "user-1",
        created: "2025-03-21T11:00:00Z",
        updated: "2025-03-21T11:00:00Z",
    }
    .build();
    task.checklists.push(checklist(
        "checklist-10",
        "Implementación",
        &[
            ("item-10-1", "Configurar Stripe", false),
            ("item-10-2", "Configurar PayPal", false),
            ("item-10-3", "Implementar webhooks", false),
        ],
    ));
    tasks.push(task);

    tasks.into_iter().map(|t| (t.id.clone(), t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskId;

    #[test]
    fn test_every_column_reference_resolves() {
        let store = demo_store();
        let board = BoardId::new(1);
        let tasks = &store.tasks[&board];
        assert_eq!(tasks.len(), 16);

        for column in &store.columns[&board] {
            for id in &column.task_ids {
                assert!(tasks.contains_key(id), "dangling {id}");
            }
        }
    }

    #[test]
    fn test_demo_counts() {
        let store = demo_store();
        let tasks = &store.tasks[&BoardId::new(1)];
        assert_eq!(tasks.values().filter(|t| t.completed).count(), 10);
        assert!(tasks[&TaskId::from("task-4")].is_blocked());
        assert_eq!(store.users.len(), 5);
        assert_eq!(store.boards.len(), 2);
        assert!(!store.columns.contains_key(&BoardId::new(2)));
    }

    #[test]
    fn test_insertion_order_follows_columns() {
        let store = demo_store();
        let ids: Vec<_> = store.tasks[&BoardId::new(1)]
            .keys()
            .take(7)
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(
            ids,
            ["task-1", "task-2", "task-3", "task-4", "task-5", "task-6", "task-11"]
        );
    }
}

//! Spanish translations (es-ES)

use super::keys::{
    CommonTexts, ErrorTexts, FormTexts, HelpTexts, HintTexts, IndicatorTexts, ModalTexts,
    NavTexts, QueryTexts, RegistryTexts, StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Tracker Hub",
        yes: "Sí",
        no: "No",
        cancel: "Cancelar",
        confirm: "Confirmar",
        close: "Cerrar",
        loading: "Cargando...",
        on: "Sí",
        off: "No",
    },

    nav: NavTexts {
        connections: "Conexiones",
        data: "Datos",
    },

    indicator: IndicatorTexts {
        disconnected: "Desconectado",
    },

    registry: RegistryTexts {
        title: "Conexiones guardadas",
        empty: "No hay conexiones guardadas",
        connect: "Conectar",
        connected: "Conectado",
        delete: "Eliminar",
        selected: "Conexión actualizada",
        deleted: "Conexión eliminada",
        select_failed: "Error al cambiar la conexión",
        delete_failed: "Error al eliminar la conexión",
    },

    form: FormTexts {
        title: "Nueva conexión",
        domain: "Dominio",
        account: "Correo",
        token: "Token",
        submit: "Guardar",
        check: "Comprobar",
        submitting: "Conectando...",
        checking: "Comprobando...",
        fallback_error: "Error al conectar. Verifica tus datos.",
        missing_fields: "Completa dominio, correo y token.",
        unavailable: "Error al probar conexión",
        check_ok: "Credenciales válidas",
        check_failed: "Credenciales no válidas",
    },

    query: QueryTexts {
        title: "Consulta",
        projects: "Proyectos",
        workflows: "Workflows",
        statuses: "Estados",
        execute: "Ejecutar",
        running: "Ejecutando...",
        no_connection: "No hay conexión configurada. Por favor, configura la conexión en la página de Conexiones.",
        failed: "Error al ejecutar consulta",
        empty_result: "Sin resultados",
        results: "Resultados",
    },

    tables: TableTexts {
        statuses: "Estados",
        projects: "Proyectos",
        workflows: "Workflows",
        id: "ID",
        name: "Nombre",
        description: "Descripción",
        key: "Clave",
        workflow: "Workflow",
        transitions: "Transiciones",
        from: "Desde",
        to: "Hasta",
        start: "Inicio",
    },

    errors: ErrorTexts {
        busy: "Ya hay una solicitud en curso",
        unavailable: "Servidor no disponible",
    },

    status_bar: StatusBarTexts {
        ready: "Listo",
        loading: "Cargando...",
    },

    modal: ModalTexts {
        confirm_delete_title: "Eliminar conexión",
        confirm_delete_message: "¿Seguro que quieres eliminar esta conexión?",
        notice_title: "Aviso",
        error_title: "Error",
    },

    hints: HintTexts {
        switch_page: "Cambiar página",
        next_field: "Siguiente campo",
        move_up_down: "Mover",
        submit: "Guardar",
        check: "Comprobar",
        connect: "Conectar",
        delete: "Eliminar",
        refresh: "Actualizar",
        toggle: "Marcar",
        execute: "Ejecutar",
        help: "Ayuda",
        quit: "Salir",
        dismiss: "Cerrar",
    },

    help: HelpTexts {
        title: "Ayuda",
        global_shortcuts: "Atajos globales",
        connections_shortcuts: "Página de conexiones",
        data_shortcuts: "Página de datos",
        language: "Idioma",
    },
};

//! Italian (`it`) messages of the EMS-ESP web interface.

use super::RawEntry::{self, List, Pending, Text};

pub(crate) const LANGUAGE: &str = "it";

pub(crate) static ENTRIES: &[RawEntry] = &[
    Text("LANGUAGE", "Lingua"),
    Text("RETRY", "Riprovare"),
    Text("LOADING", "Caricamento"),
    Text("IS_REQUIRED", "{0} é richiesto"),
    Text("SIGN_IN", "Connettersi"),
    Text("SIGN_OUT", "Disconnettersi"),
    Text("USERNAME", "Nome Utente"),
    Text("PASSWORD", "Password"),
    Text("SU_PASSWORD", "su Password"),
    Text("DASHBOARD", "Pannello di Controllo"),
    Text("SETTINGS_OF", "Impostazioni {0}"),
    Text("HELP_OF", "{0} Aiuto"),
    Text("LOGGED_IN", "Registrato come {name}"),
    Text("PLEASE_SIGNIN", "Prego registrarsi per continuare"),
    Text("UPLOAD_SUCCESSFUL", "Caricamento finito"),
    Text("DOWNLOAD_SUCCESSFUL", "Scaricamento finito"),
    Text("INVALID_LOGIN", "Dettagli accesso invalidi"),
    Text("NETWORK", "Rete"),
    Text("SECURITY", "Sicurezza"),
    Text("ONOFF_CAP", "ON/OFF"),
    Text("ONOFF", "on/off"),
    Text("TYPE", "Tipo"),
    Text("DESCRIPTION", "Descrizione"),
    Text("ENTITIES", "Entità"),
    Text("REFRESH", "Ricaricare"),
    Text("EXPORT", "Esporta"),
    Text("DEVICE_DETAILS", "Dettagli dispositivo"),
    Text("ID_OF", "{0} ID"),
    Text("DEVICE", "Dispositivo"),
    Text("PRODUCT", "Prodotto"),
    Text("VERSION", "Versione"),
    Text("BRAND", "Marca"),
    Text("ENTITY_NAME", "Nome Entità"),
    Text("VALUE", "{{Valore|valore}}"),
    Text("DEVICE_DATA", "Device Data"),
    Text("SENSOR_DATA", "Sensor Data"),
    Text("DEVICES", "Dispositivi"),
    Text("SENSORS", "Sensori"),
    Text("RUN_COMMAND", "Esegui"),
    Text("CHANGE_VALUE", "Cambia Valore"),
    Text("CANCEL", "Annulla"),
    Text("RESET", "Reset"),
    Text("APPLY_CHANGES", "Applica Cambiamenti ({0})"),
    Text("UPDATE", "Update"),
    Text("EXECUTE", "Execute"),
    Text("REMOVE", "Elimina"),
    Text("PROBLEM_UPDATING", "Problema aggiornamento"),
    Text("PROBLEM_LOADING", "Problema caricamento"),
    Text("ACCESS_DENIED", "Accesso Negato"),
    Text("ANALOG_SENSOR", "Sensore Analogico"),
    Text("ANALOG_SENSORS", "Sensori Analogici"),
    Text("SETTINGS", "Settings"),
    Text("UPDATED_OF", "{0} Aggiornati"),
    Text("UPDATE_OF", "Aggiorna {0}"),
    Text("REMOVED_OF", "{0} Rimossi"),
    Text("DELETION_OF", "{0} Cancellati"),
    Text("OFFSET", "Offset"),
    Text("FACTOR", "Fattore"),
    Text("FREQ", "Frequenza"),
    Text("DUTY_CYCLE", "Ciclo di lavoro"),
    Text("UNIT", "UoM"),
    Text("STARTVALUE", "Valore di partenza"),
    Text("WARN_GPIO", "Avvertimento: prestare attenzione quando si assegna un GPIO!"),
    Text("EDIT", "Modifica"),
    Text("SENSOR", "Sensore"),
    Text("TEMP_SENSOR", "Sensore Temperatura"),
    Text("TEMP_SENSORS", "Sensori Temperatura"),
    Text("WRITE_CMD_SENT", "Scrittura comando inviata"),
    Text("WRITE_CMD_FAILED", "Scittura comando fallita"),
    Text(
        "EMS_BUS_WARNING",
        "EMS bus disconnesso. Se questo avvertimento persiste dopo alcuni secondi prego verificare impostazioni scheda",
    ),
    Text("EMS_BUS_SCANNING", "Scansione dispositivi EMS ..."),
    Text("CONNECTED", "Connesso"),
    Text("TX_ISSUES", "Problema di Tx - prova una modalità differente"),
    Text("DISCONNECTED", "Disconnesso"),
    Text("EMS_SCAN", "Sei sicuro di voler iniziare una scansione completa del bus EMS ?"),
    Text("EMS_BUS_STATUS", "Stato Bus EMS"),
    Text("ACTIVE_DEVICES", "Dispositivi & sensori attivi"),
    Text("EMS_DEVICE", "Dispositivo EMS "),
    Text("SUCCESS", "SUCCESSO"),
    Text("FAIL", "FALLITO"),
    Text("QUALITY", "QUALITÂ"),
    Text("SCAN_DEVICES", "Scansione per nuovi dispositivi"),
    Text("EMS_BUS_STATUS_TITLE", "Bus EMS & Stato Attività"),
    Text("SCAN", "Scansione"),
    List(
        "STATUS_NAMES",
        &[
            "Telegrammi EMS Ricevuti (Rx)",
            "EMS Letti (Tx)",
            "EMS Scritti (Tx)",
            "Letture Sensori Temperatura",
            "Letture Sensori Analogici",
            "Pubblicazioni MQTT",
            "Chiamate API",
            "Messaggi Syslog",
        ],
    ),
    Text("NUM_DEVICES", "{num} Dispositivi {{s}}"),
    Text("NUM_TEMP_SENSORS", "{num} Sensori Temperatura {{s}}"),
    Text("NUM_ANALOG_SENSORS", "{num} Sensori Analogici {{s}}"),
    Text("NUM_DAYS", "{num} giorni {{s}}"),
    Text("NUM_SECONDS", "{num} secondi {{s}}"),
    Text("NUM_HOURS", "{num} ore {{s}}"),
    Text("NUM_MINUTES", "{num} minuti {{s}}"),
    Text("APPLICATION_SETTINGS", "Impostazione Applicazione"),
    Text("CUSTOMIZATIONS", "Personalizzazione"),
    Text("APPLICATION_RESTARTING", "EMS-ESP sta riavviando"),
    Text("INTERFACE_BOARD_PROFILE", "Profilo scheda di interfaccia"),
    Text(
        "BOARD_PROFILE_TEXT",
        "Selezionare un profilo di interfaccia pre-configurato dalla lista sottostante o scegliere un profilo personalizzato per configurare le impostazioni del tuo hardware",
    ),
    Text("BOARD_PROFILE", "Profilo Scheda"),
    Text("CUSTOM", "Personalizzazione"),
    Text("GPIO_OF", "GPIO {0}"),
    Text("BUTTON", "Pulsante"),
    Text("TEMPERATURE", "Temperatura"),
    Text("PHY_TYPE", "Eth PHY Type"),
    Text("DISABLED", "disattivato"),
    Text("TX_MODE", "Modo Tx "),
    Text("HARDWARE", "Hardware"),
    Text("EMS_BUS", "{{BUS|EMS BUS}}"),
    Text("GENERAL_OPTIONS", "Opzioni Generali"),
    Text("LANGUAGE_ENTITIES", "Lingua (per entità dispositivi)"),
    Text("HIDE_LED", "Nascondi LED"),
    Text("ENABLE_TELNET", "Abilità la Console Telnet"),
    Text("ENABLE_ANALOG", "Abilita Sensori Analogici"),
    Text("CONVERT_FAHRENHEIT", "Converti valori temperatura in Fahrenheit"),
    Text("BYPASS_TOKEN", "Ignora autorizzazione del token di accesso sulle chiamate API"),
    Text(
        "READONLY",
        "Abilita modalità sola-lettura (blocca tutti i comandi di scrittura EMS Tx in uscita)",
    ),
    Text("UNDERCLOCK_CPU", "Abbassa velocità della CPU"),
    Text("HEATINGOFF", "Avviamento caldaia con riscaldamento forzato spento"),
    Text("ENABLE_SHOWER_TIMER", "Abilita timer doccia"),
    Text("ENABLE_SHOWER_ALERT", "Abilita avviso doccia"),
    Text("TRIGGER_TIME", "Tempo di avvio"),
    Text("COLD_SHOT_DURATION", "Durata colpo freddo"),
    Text("FORMATTING_OPTIONS", "Opzioni di formattazione"),
    Text("BOOLEAN_FORMAT_DASHBOARD", "Pannello di controllo in formato booleano"),
    Text("BOOLEAN_FORMAT_API", "Formato booleano API/MQTT"),
    Text("ENUM_FORMAT", "Enum Format API/MQTT"),
    Text("INDEX", "Indice"),
    Text("ENABLE_PARASITE", "Abilita potenza parassita"),
    Text("LOGGING", "Registrazione"),
    Text("LOG_HEX", "Registra telegrammi EMS in esadecimale"),
    Text("ENABLE_SYSLOG", "Abilita Syslog"),
    Text("LOG_LEVEL", "Livello registrazione"),
    Text("MARK_INTERVAL", "Segna Intervallo"),
    Text("SECONDS", "secondi"),
    Text("MINUTES", "minuti"),
    Text("HOURS", "ore"),
    Text("RESTART", "Riavvia"),
    Text(
        "RESTART_TEXT",
        "EMS-ESP necessita di essere riavviato per applicare il cambio impostazioni del sistema",
    ),
    Text("RESTART_CONFIRM", "Sei sicuro di voler riavviare EMS-ESP?"),
    Text("COMMAND", "Comando"),
    Text("CUSTOMIZATIONS_RESTART", "Tutte le personalizzazioni sono state rimosse. Riavvio ..."),
    Text(
        "CUSTOMIZATIONS_FULL",
        "Le entità selezionate hanno superato il limite. Si prega di salvare in batch",
    ),
    Text("CUSTOMIZATIONS_SAVED", "Personalizzazioni salvate"),
    Text(
        "CUSTOMIZATIONS_HELP_1",
        "Seleziona un dispositivo e personalizza le opzioni delle entità o fai clic per rinominarlo",
    ),
    Text("CUSTOMIZATIONS_HELP_2", "seleziona come preferito"),
    Text("CUSTOMIZATIONS_HELP_3", "disabilita azione scrittura"),
    Text("CUSTOMIZATIONS_HELP_4", "esculdi da MQTT e API"),
    Text("CUSTOMIZATIONS_HELP_5", "nascondi dal Pannello di controllo"),
    Text("CUSTOMIZATIONS_HELP_6", "rimuovi dalla memoria"),
    Text("SELECT_DEVICE", "Seleziona un dispositivo"),
    Text("SET_ALL", "imposta tutto"),
    Text("OPTIONS", "Opzioni"),
    Text("NAME", "Nome"),
    Text(
        "CUSTOMIZATIONS_RESET",
        "Sei sicuro di voler rimuovere tutte le personalizzazioni incluse le impostazioni personalizzate dei sensori di temperatura e analogici?",
    ),
    Text("DEVICE_ENTITIES", "Entità Dispositivo"),
    Text("SUPPORT_INFORMATION", "Informazioni di Supporto"),
    Text("CLICK_HERE", "Clicca qui"),
    Text(
        "HELP_INFORMATION_1",
        "Visita il wiki online per ottenere istruzioni su come configurare EMS-ESP",
    ),
    Text(
        "HELP_INFORMATION_2",
        "Per la chat della community dal vivo unisciti al nostro server Discord",
    ),
    Text("HELP_INFORMATION_3", "Per richiedere una funzionalità o segnalare un errore"),
    Text(
        "HELP_INFORMATION_4",
        "ricordati di scaricare e allegare le informazioni del tuo sistema per una risposta più rapida quando segnali un problema",
    ),
    Text(
        "HELP_INFORMATION_5",
        "EMS-ESP è un progetto gratuito e open-source. Supporta il suo sviluppo futuro assegnandogli una stella su Github!",
    ),
    Text("UPLOAD", "Carica"),
    Text("DOWNLOAD", "Scarica"),
    Text("ABORTED", "Annullato"),
    Text("FAILED", "Fallito"),
    Text("SUCCESSFUL", "Riuscito"),
    Text("SYSTEM", "Sistema"),
    Text("LOG_OF", "Registro {0}"),
    Text("STATUS_OF", "Stato {0}"),
    Text("UPLOAD_DOWNLOAD", "Caricamento/Scaricamento"),
    Text("VERSION_ON", "Attualmente stai eseguendo la versione"),
    Text("SYSTEM_APPLY_FIRMWARE", "per applicare il nuovo firmware"),
    Text("CLOSE", "Chiudere"),
    Text("USE", "Usa"),
    Text("FACTORY_RESET", "Impostazioni di fabbrica"),
    Text(
        "SYSTEM_FACTORY_TEXT",
        "Il dispositivo è stato ripristinato alle impostazioni di fabbrica e ora verrà riavviato",
    ),
    Text(
        "SYSTEM_FACTORY_TEXT_DIALOG",
        "Sei sicuro di voler ripristinare il dispositivo alle impostazioni di fabbrica??",
    ),
    Text("VERSION_CHECK", "Verifica Versione"),
    Text("THE_LATEST", "Ultima"),
    Text("OFFICIAL", "ufficiale"),
    Text("DEVELOPMENT", "sviluppo"),
    Text("RELEASE_IS", "rilascio é"),
    Text("RELEASE_NOTES", "note rilascio"),
    Text("EMS_ESP_VER", "Versione EMS-ESP"),
    Text("PLATFORM", "Dispositivo (Piattaforma / SDK)"),
    Text("UPTIME", "Tempo di attività del sistema"),
    Text("CPU_FREQ", "Frequenza CPU "),
    Text("HEAP", "Heap (Free / Max Alloc)"),
    Text("PSRAM", "PSRAM (Size / Free)"),
    Text("FLASH", "Flash Chip (Size / Speed)"),
    Text("APPSIZE", "Applicazione (Usata / Libera)"),
    Text("FILESYSTEM", "Memoria Sistema (Usata / Libera)"),
    Text("BUFFER_SIZE", "Max Buffer Size"),
    Text("COMPACT", "Compact"),
    Text("ENABLE_OTA", "Abilita aggiornamenti OTA"),
    Text("DOWNLOAD_CUSTOMIZATION_TEXT", "Scarica personalizzazioni entità"),
    Text("DOWNLOAD_SCHEDULE_TEXT", "Download Scheduler Events"),
    Text(
        "DOWNLOAD_SETTINGS_TEXT",
        "Scarica le impostazioni dell applicazione. Fai attenzione quando condividi le tue impostazioni poiché questo file contiene password e altre informazioni di sistema riservate",
    ),
    Text(
        "UPLOAD_TEXT",
        "Carica un nuovo file firmware (.bin) , file delle impostazioni o delle personalizzazioni (.json) di seguito, per un opzione di convalida scaricare dapprima un file \"*.MD5\" ",
    ),
    Text("UPLOADING", "Caricamento"),
    Text("UPLOAD_DROP_TEXT", "Trascina il file o clicca qui"),
    Text("ERROR", "Errore Inaspettato, prego tenta ancora"),
    Text("TIME_SET", "Imposta Ora"),
    Text("MANAGE_USERS", "Gestione Utenti"),
    Text("IS_ADMIN", "Amministratore"),
    Text("USER_WARNING", "Devi avere configurato almeno un utente amministratore"),
    Text("ADD", "Aggiungi"),
    Text("ACCESS_TOKEN_FOR", "Token di accesso per"),
    Text(
        "ACCESS_TOKEN_TEXT",
        "Il token seguente viene utilizzato con le chiamate API REST che richiedono l autorizzazione. Può essere passato come token Bearer nell intestazione di autorizzazione o nel parametro di query URL access_token.",
    ),
    Text("GENERATING_TOKEN", "Generazione token"),
    Text("USER", "Utente"),
    Text("MODIFY", "Modifica"),
    Text(
        "SU_TEXT",
        "La password su (super utente) viene utilizzata per firmare i token di autenticazione e abilitare anche i privilegi di amministratore all interno della console.",
    ),
    Text("NOT_ENABLED", "Non abilitato"),
    Text("ERRORS_OF", "Errori {0}"),
    Text("DISCONNECT_REASON", "Motivo disconnessione"),
    Text("ENABLE_MQTT", "Abilita MQTT"),
    Text("BROKER", "Broker"),
    Text("CLIENT", "Cliente"),
    Text("BASE_TOPIC", "Base"),
    Text("OPTIONAL", "opzionale"),
    Text("FORMATTING", "Formattazione"),
    Text("MQTT_FORMAT", "Formato Topic/Payload "),
    Text("MQTT_NEST_1", "Inserito in un singolo argomento"),
    Text("MQTT_NEST_2", "Come argomenti individuali"),
    Text("MQTT_RESPONSE", "Pubblica uscita del comando in un argomento di risposta"),
    Text("MQTT_PUBLISH_TEXT_1", "Pubblica argomenti a valore singolo sul cambiamento"),
    Text("MQTT_PUBLISH_TEXT_2", "Pubblica per comandare gli argomenti (ioBroker)"),
    Text("MQTT_PUBLISH_TEXT_3", "Abilita rilevamento MQTT (Home Assistant, Domoticz)"),
    Text("MQTT_PUBLISH_TEXT_4", "Prefisso per gli argomenti di scoperta"),
    Text("MQTT_PUBLISH_TEXT_5", "Discovery type"),
    Text("MQTT_PUBLISH_INTERVALS", "Pubblica intervalli"),
    Text("MQTT_INT_BOILER", "Caldaie e Pompe di Calore"),
    Text("MQTT_INT_THERMOSTATS", "Termostati"),
    Text("MQTT_INT_SOLAR", "Moduli solari"),
    Text("MQTT_INT_MIXER", "Moduli Mixer"),
    Text("MQTT_QUEUE", "Coda MQTT"),
    Text("DEFAULT", "Predefinito"),
    Text("MQTT_ENTITY_FORMAT", "Formato ID entità"),
    Text("MQTT_ENTITY_FORMAT_0", "Singola istanza, nome lungo (v3.4)"),
    Text("MQTT_ENTITY_FORMAT_1", "Sinola istanza, nome breve"),
    Text("MQTT_ENTITY_FORMAT_2", "Istanze multiple, nome breve"),
    Text("MQTT_CLEAN_SESSION", "Imposta sessione pulita"),
    Text("MQTT_RETAIN_FLAG", "Imposta sempre il flag Retain"),
    Text("INACTIVE", "Inattivo"),
    Text("ACTIVE", "Attivo"),
    Text("UNKNOWN", "Sconosciuto"),
    Text("SET_TIME", "Imposta ora"),
    Text("SET_TIME_TEXT", "Immettere la data e l ora locale di seguito per impostare l ora"),
    Text("LOCAL_TIME", "Ora locale"),
    Text("UTC_TIME", "Ora UTC"),
    Text("ENABLE_NTP", "Abilita NTP"),
    Text("NTP_SERVER", "Server NTP"),
    Text("TIME_ZONE", "Fuso orario"),
    Text("ACCESS_POINT", "Access Point"),
    Text("AP_PROVIDE", "Abilita Access Point"),
    Text("AP_PROVIDE_TEXT_1", "sempre"),
    Text("AP_PROVIDE_TEXT_2", "quando WiFi é disconnessa"),
    Text("AP_PROVIDE_TEXT_3", "mai"),
    Text("AP_PREFERRED_CHANNEL", "Canale preferito"),
    Text("AP_HIDE_SSID", "Nascondi SSID"),
    Text("AP_CLIENTS", "Clienti AP"),
    Text("AP_MAX_CLIENTS", "Clienti Massimi"),
    Text("AP_LOCAL_IP", "IP Locale"),
    Text("NETWORK_SCAN", "Scansione reti WiFi"),
    Text("IDLE", "Inattivo"),
    Text("LOST", "Perso"),
    Text("SCANNING", "Scansione"),
    Text("SCAN_AGAIN", "Scansiona ancora"),
    Text("NETWORK_SCANNER", "Scansione Rete"),
    Text("NETWORK_NO_WIFI", "Nessuana rete WiFi trovata"),
    Text("NETWORK_BLANK_SSID", "lasciare vuoto per disattivare WiFi"),
    Pending("NETWORK_BLANK_BSSID", "leave blank to use only SSID"),
    Text("TX_POWER", "Potenza Tx"),
    Text("HOSTNAME", "Nome ospite"),
    Text("NETWORK_DISABLE_SLEEP", "Disabilita la modalità sospensione Wi-Fi"),
    Text("NETWORK_LOW_BAND", "Usa una larghezza di banda WiFi inferiore"),
    Text("NETWORK_USE_DNS", "Abilita servizio mDNS"),
    Text("NETWORK_ENABLE_CORS", "Abilita CORS"),
    Text("NETWORK_CORS_ORIGIN", "origine CORS"),
    Text("NETWORK_ENABLE_IPV6", "Abilita supporto IPv6"),
    Text("NETWORK_FIXED_IP", "Usa indirizzo IP fisso"),
    Text("NETWORK_GATEWAY", "Gateway"),
    Text("NETWORK_SUBNET", "Maschera Sottorete"),
    Text("NETWORK_DNS", "Server DNS"),
    Text("ADDRESS_OF", "Indirizzo {0}"),
    Text("ADMIN", "Amministratore"),
    Text("GUEST", "Ospite"),
    Text("NEW", "Nuovo"),
    Text("NEW_NAME_OF", "Nuovo nome {0}"),
    Text("ENTITY", "entità"),
    Text("MIN", "min"),
    Text("MAX", "max"),
    Text("BLOCK_NAVIGATE_1", "Hai modifiche non salvate"),
    Text(
        "BLOCK_NAVIGATE_2",
        "Se passi a una pagina diversa, le modifiche non salvate andranno perse. Sei sicuro di voler lasciare questa pagina?",
    ),
    Text("STAY", "Stai"),
    Text("LEAVE", "Esci"),
    Text("SCHEDULER", "Programma eventi"),
    Text(
        "SCHEDULER_HELP_1",
        "Automatizza i comandi aggiungendo gli eventi programmati di seguito. Imposta un nome univoco per abilitare/disabilitare l'attivazione tramite API/MQTT.",
    ),
    Text("SCHEDULER_HELP_2", "per attivare una volta all'avvio"),
    Text("SCHEDULE", "Programma"),
    Text("TIME", "Ora"),
    Text("TIMER", "Orologio"),
    Text("SCHEDULE_UPDATED", "Calendario aggiornato"),
    Text("SCHEDULE_TIMER_1", "All avvio"),
    Text("SCHEDULE_TIMER_2", "Ogni minuto"),
    Text("SCHEDULE_TIMER_3", "Ogni ora"),
    Text("CUSTOM_ENTITIES", "Entità personalizzate"),
    Text("ENTITIES_HELP_1", "Recupera entità personalizzate dal BUS EMS"),
    Text("ENTITIES_UPDATED", "Entità aggiornate"),
    Text("WRITEABLE", "Scrivibile"),
    Text("SHOWING", "Visualizza"),
    Text("SEARCH", "Ricerca"),
    Pending("CERT", "TLS root certificate (leave blank to disable TLS)"),
];

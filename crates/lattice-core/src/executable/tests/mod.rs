mod executable_schema;
